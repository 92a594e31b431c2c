//! Static page content: the gallery records and the bilingual strings.

pub const SITE_URI: &str = "https://fehernandez.com/";
pub const AUTHOR: &str = "felipe hernández 👾";
pub const WINDOW_TITLE: &str = "felipe hernández - portfolio";
pub const FOOTER_TEXT: &str = "All rights reserved. Made with love by";
pub const FOOTER_LINK_TEXT: &str = "FH.";

/// Natural size of every gallery screenshot.
pub const IMAGE_WIDTH: f32 = 1240.0;
pub const IMAGE_HEIGHT: f32 = 874.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRecord {
    /// File name, resolved against the asset directory.
    pub uri: &'static str,
    pub alt_text: &'static str,
    pub link_uri: &'static str,
}

pub const IMAGES: [ImageRecord; 6] = [
    ImageRecord {
        uri: "hk.png",
        alt_text: "Pastelería HK",
        link_uri: "https://sharp-mcnulty-bd0b4d.netlify.app/",
    },
    ImageRecord {
        uri: "i3.png",
        alt_text: "Imaginary Industrial Illusions",
        link_uri: "https://imaginaryillusions.github.io/",
    },
    ImageRecord {
        uri: "dororo.png",
        alt_text: "DororoApp",
        link_uri: "https://cranky-pare-7e3d9c.netlify.app/",
    },
    ImageRecord {
        uri: "fh.png",
        alt_text: "My site",
        link_uri: "https://fehernandez.com/",
    },
    ImageRecord {
        uri: "pokedux.png",
        alt_text: "Pokédux",
        link_uri: "https://fehernandez.com/pokedux",
    },
    ImageRecord {
        uri: "todomachine.png",
        alt_text: "ToDo Machine",
        link_uri: "https://fehernandez.com/todo-machine",
    },
];

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    const SPANISH_LOCALE: &'static str = "es-ES";

    /// Only an exact `es-ES` selects Spanish, every other tag falls back to English.
    pub fn from_locale(locale: &str) -> Self {
        if locale == Self::SPANISH_LOCALE {
            Language::Spanish
        } else {
            Language::English
        }
    }

    /// Picks the locale from the environment the same way libc does:
    /// `LC_ALL` wins over `LC_MESSAGES`, which wins over `LANG`.
    pub fn from_env() -> Self {
        let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| normalize_locale(&value))
            .unwrap_or_default();
        Self::from_locale(&locale)
    }
}

/// Turns a POSIX locale (`es_ES.UTF-8@euro`) into a BCP 47 style tag (`es-ES`).
pub fn normalize_locale(posix: &str) -> String {
    let tag = posix.split(&['.', '@'][..]).next().unwrap_or("");
    tag.replace('_', "-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedStringPair {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl LocalizedStringPair {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.primary,
            Language::Spanish => self.secondary,
        }
    }
}

pub const TITLE: LocalizedStringPair = LocalizedStringPair {
    primary: "portfolio🤓",
    secondary: "portafolio🤓",
};

pub const SUBTITLE: LocalizedStringPair = LocalizedStringPair {
    primary: "Here you can find a small showcase of some of the projects I have worked on, or have developed myself.",
    secondary: "Aquí podrás encontrar una pequeña muestra de los proyectos en los que he participado.",
};

pub const BANNER: LocalizedStringPair = LocalizedStringPair {
    primary: "projectsihaveworkedon",
    secondary: "proyectosenlosqueheparticipado",
};

/// Text resolved for one language, handed to the widgets.
#[derive(Debug, Clone, Copy)]
pub struct PageText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub banner: &'static str,
}

impl PageText {
    pub fn new(language: Language) -> Self {
        Self {
            title: TITLE.get(language),
            subtitle: SUBTITLE.get(language),
            banner: BANNER.get(language),
        }
    }
}
