//! Static front-page content: section cards and gallery entries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub class: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub href: &'static str,
}

pub const CATEGORIES: &[Card] = &[
    Card {
        class: "category-card",
        title: "Uudised",
        body: "Värsked kultuuriuudised ERR-ist ja Postimehest.",
        href: "#uudised",
    },
    Card {
        class: "category-card",
        title: "Sündmused",
        body: "Kontserdid, etendused ja näitused üle Eesti.",
        href: "#syndmused",
    },
    Card {
        class: "category-card",
        title: "Kultuur",
        body: "Eesti luule, laulupeod ja kultuuritegelased.",
        href: "#kultuur",
    },
    Card {
        class: "category-card",
        title: "Galerii",
        body: "Pildid kultuurisündmustelt.",
        href: "#galerii",
    },
];

pub const NEWS: &[Card] = &[
    Card {
        class: "news-item",
        title: "Laulupeo repertuaar on avalikustatud",
        body: "Üldlaulupeo kavas on nii klassikat kui ka uusloomingut.",
        href: "https://kultuur.err.ee/",
    },
    Card {
        class: "news-item",
        title: "Koidula muuseumis avati uus näitus",
        body: "Pärnus asuv muuseum tutvustab luuletaja kirjavahetust.",
        href: "https://kultuur.err.ee/",
    },
];

pub const EVENTS: &[Card] = &[
    Card {
        class: "event-card",
        title: "Mu isamaa armas",
        body: "Koorikontsert Estonia kontserdisaalis.",
        href: "https://www.piletilevi.ee/",
    },
    Card {
        class: "event-card",
        title: "Luuleõhtu Tartus",
        body: "Koidula ja Juhan Liivi luule noorte näitlejate esituses.",
        href: "https://kultuurikava.ee/",
    },
];

pub const CULTURE: &[Card] = &[
    Card {
        class: "culture-item",
        title: "Lydia Koidula",
        body: "Eesti luuletaja, kelle sõnadele on loodud \"Mu isamaa on minu arm\".",
        href: "https://et.wikipedia.org/wiki/Lydia_Koidula",
    },
    Card {
        class: "culture-item",
        title: "Eesti laulupidu",
        body: "1869. aastast peetav laulu- ja tantsupidu.",
        href: "https://et.wikipedia.org/wiki/Eesti_laulupidu",
    },
];

pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: &[Photo] = &[
    Photo {
        src: "https://upload.wikimedia.org/wikipedia/commons/5/5f/Lydia_Koidula.jpg",
        alt: "Lydia Koidula portree",
        caption: "Lydia Koidula",
    },
    Photo {
        src: "https://upload.wikimedia.org/wikipedia/commons/9/9c/Tallinn_Song_Festival_Grounds.jpg",
        alt: "Tallinna lauluväljak",
        caption: "Lauluväljak",
    },
    Photo {
        src: "/static/images/laulupidu-1869.jpg",
        alt: "Esimene üldlaulupidu",
        caption: "Tartu, 1869",
    },
];
