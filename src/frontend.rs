use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::archive::Archive;
use crate::home::Home;
use crate::spotlight::{spotlight_background, PointerPosition};
use crate::theme::{BrowserThemeStore, Theme, ThemePreference};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/archive")]
    Archive,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemePreference<BrowserThemeStore> {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => {
                let mut next = (*self).clone();
                let theme = next.toggle();
                apply_theme_with_transition(theme);
                Rc::new(next)
            }
        }
    }
}

pub type ThemeHandle = UseReducerHandle<ThemePreference<BrowserThemeStore>>;

#[hook]
pub fn use_theme() -> Theme {
    use_context::<ThemeHandle>()
        .map(|handle| handle.theme())
        .unwrap_or(Theme::FALLBACK)
}

#[hook]
pub fn use_theme_toggle() -> Callback<MouseEvent> {
    let handle = use_context::<ThemeHandle>();
    Callback::from(move |_| {
        if let Some(handle) = handle.as_ref() {
            handle.dispatch(ThemeAction::Toggle);
        }
    })
}

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn apply_theme(theme: Theme) {
    let root = window()
        .and_then(|win| win.document())
        .and_then(|document| document.document_element());
    let applied = root.is_some_and(|root| root.set_attribute("data-theme", theme.as_str()).is_ok());
    if !applied {
        gloo::console::warn!("unable to set data-theme to", theme.as_str());
    }
}

fn reduced_motion_requested() -> bool {
    window()
        .and_then(|win| win.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

fn view_transition_starter() -> Option<(JsValue, Function)> {
    let document: JsValue = window()?.document()?.into();
    let start = Reflect::get(&document, &JsValue::from_str("startViewTransition"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((document, start))
}

/// Cross-fades through the View Transitions API where the browser has it.
fn apply_theme_with_transition(theme: Theme) {
    match view_transition_starter() {
        Some((document, start)) if !reduced_motion_requested() => {
            let update = Closure::once_into_js(move || apply_theme(theme));
            if start.call1(&document, &update).is_err() {
                apply_theme(theme);
            }
        }
        _ => apply_theme(theme),
    }
}

/// Full-viewport gradient that follows the pointer. Never receives pointer events.
#[function_component(Spotlight)]
pub fn spotlight() -> Html {
    let theme = use_theme();
    let position = use_state_eq(PointerPosition::default);

    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        position.set(PointerPosition {
                            x: event.client_x(),
                            y: event.client_y(),
                        });
                    }
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <div class="spotlight" aria-hidden="true" style={spotlight_background(theme, *position)}></div>
    }
}

#[derive(Properties, PartialEq)]
struct ErrorBoundaryProps {
    children: Html,
}

/// Coarse safety net: any uncaught error swaps the page for a reset screen. In-flight state is
/// not preserved.
#[function_component(ErrorBoundary)]
fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let failed = use_state_eq(|| false);

    {
        let failed = failed.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "error", move |event| {
                    gloo::console::error!("uncaught error:", event.clone());
                    failed.set(true);
                })
            });
            move || drop(listener)
        });
    }

    if !*failed {
        return props.children.clone();
    }

    let on_reset = {
        let failed = failed.clone();
        Callback::from(move |_: MouseEvent| failed.set(false))
    };

    html! {
        <div class="error-screen" role="alert">
            <h1>{"Something went wrong"}</h1>
            <button class="button button-primary" type="button" onclick={on_reset}>{"Try Again"}</button>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Archive => html! { <Archive /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_reducer(|| ThemePreference::load(BrowserThemeStore));

    {
        let current = theme.theme();
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    html! {
        <ContextProvider<ThemeHandle> context={theme}>
            <BrowserRouter>
                <ErrorBoundary>
                    <Switch<Route> render={switch} />
                </ErrorBoundary>
            </BrowserRouter>
        </ContextProvider<ThemeHandle>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
