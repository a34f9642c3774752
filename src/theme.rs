use web_sys::Storage;

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Saved preference wins; only a missing key consults the OS scheme.
/// An unrecognized saved value counts as light, matching the save format.
pub fn load_theme() -> Theme {
    match storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten()) {
        Some(saved) => Theme::parse(&saved).unwrap_or(Theme::Light),
        None => {
            let prefers_dark = web_sys::window()
                .and_then(|window| {
                    window
                        .match_media("(prefers-color-scheme: dark)")
                        .ok()
                        .flatten()
                })
                .map(|query| query.matches())
                .unwrap_or(false);
            if prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// Sets or removes the `dark` class on the document root; the stylesheet
/// keys every dark-mode rule off that class.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let result = match theme {
        Theme::Dark => class_list.add_1(DARK_CLASS),
        Theme::Light => class_list.remove_1(DARK_CLASS),
    };
    if result.is_err() {
        gloo::console::warn!("theme: class toggle failed");
    }
}

pub fn save_theme(theme: Theme) {
    let Some(storage) = storage() else {
        gloo::console::warn!("theme: storage unavailable, preference not saved");
        return;
    };
    if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
        gloo::console::warn!("theme: storage unavailable, preference not saved");
    }
}
