use yew::prelude::*;

use crate::utils::{storage, STORAGE_KEY_THEME};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything unrecognised (including the old "system" value) falls back to dark
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// `(class to drop, class to set)` on `<html>`
fn class_swap(theme: Theme) -> (&'static str, &'static str) {
    (theme.toggled().as_str(), theme.as_str())
}

/// Puts the theme class on `<html>`
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let (stale, current) = class_swap(theme);
    let classes = root.class_list();
    if let Err(e) = classes.remove_1(stale) {
        log::warn!("⚠️ Could not remove theme class {}: {:?}", stale, e);
    }
    if let Err(e) = classes.add_1(current) {
        log::warn!("⚠️ Could not apply theme class {}: {:?}", current, e);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| Theme::from_stored(storage::read_raw(STORAGE_KEY_THEME).as_deref()));

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        if let Err(e) = storage::write_raw(STORAGE_KEY_THEME, theme.as_str()) {
            log::warn!("⚠️ {}", e);
        }
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let context = ThemeContext { theme: *theme, toggle };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}
