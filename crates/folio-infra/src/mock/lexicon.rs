//! Fixed word lists the mock generator draws from.

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Ada", "Camille", "Elliot", "Hana", "Isak", "Jonas", "Lea", "Mara", "Noor", "Oskar", "Rafael",
    "Selma", "Theo", "Yara",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Almeida", "Bergström", "Castell", "Duval", "Ekström", "Fontaine", "Hartley", "Lindqvist",
    "Moreau", "Okafor", "Petrov", "Varga",
];

pub(crate) const TITLE_ADJECTIVES: &[&str] = &[
    "quiet", "practical", "small", "honest", "slow", "unexpected", "careful", "forgotten",
    "simple", "long", "better", "curious", "stubborn", "gentle", "modern", "tiny",
];

pub(crate) const TITLE_NOUNS: &[&str] = &[
    "notes", "habits", "mornings", "compilers", "gardens", "journeys", "maps", "letters",
    "tools", "patterns", "kitchens", "trains", "archives", "experiments", "questions", "cities",
    "workshops", "routines",
];

pub(crate) const TITLE_LINKS: &[&str] = &["on", "about", "for", "beyond", "without", "between"];

pub(crate) const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

pub(crate) const TAGS: &[&str] = &[
    "rust", "travel", "cooking", "books", "photography", "productivity", "design", "music",
    "gardening", "career", "tooling", "essays",
];

pub(crate) const SOCIAL_PLATFORMS: &[&str] = &["github", "linkedin", "mastodon", "twitter"];

/// Localized headings for one static page.
pub(crate) struct PagePhrases {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Per-locale heading table, indexed in `PageKind::ALL` order.
pub(crate) const LOCALE_PHRASES: &[(&str, [PagePhrases; 3])] = &[
    (
        "en",
        [
            PagePhrases {
                title: "Welcome",
                subtitle: "Stories, notes and experiments",
            },
            PagePhrases {
                title: "About me",
                subtitle: "Who writes here, and why",
            },
            PagePhrases {
                title: "Get in touch",
                subtitle: "Questions, ideas or just hello",
            },
        ],
    ),
    (
        "fr",
        [
            PagePhrases {
                title: "Bienvenue",
                subtitle: "Histoires, notes et expériences",
            },
            PagePhrases {
                title: "À propos",
                subtitle: "Qui écrit ici, et pourquoi",
            },
            PagePhrases {
                title: "Me contacter",
                subtitle: "Questions, idées ou simple bonjour",
            },
        ],
    ),
];

pub(crate) fn phrases_for(locale: &str) -> Option<&'static [PagePhrases; 3]> {
    LOCALE_PHRASES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(locale))
        .map(|(_, phrases)| phrases)
}
