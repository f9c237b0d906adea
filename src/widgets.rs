use std::time::Duration;

use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::hover::HoverSwap;
use crate::typewriter::{CursorBlink, Frame, Typewriter, BLINK_INTERVAL, TYPE_DELAY};

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[derive(Properties, PartialEq)]
pub struct TypeWriterProps {
    pub phrases: &'static [&'static str],
}

/// One pending timeout per frame; the effect teardown drops it so nothing fires after unmount.
#[function_component(TypeWriter)]
pub fn type_writer(props: &TypeWriterProps) -> Html {
    let typing = use_state(|| {
        Typewriter::new(props.phrases.iter().copied()).map(|writer| {
            let first = Frame {
                text: String::new(),
                delay: TYPE_DELAY,
            };
            (writer, first)
        })
    });
    let cursor = use_state_eq(CursorBlink::default);

    {
        let handle = typing.clone();
        use_effect_with((*typing).clone(), move |current| {
            let pending = current.clone().map(|(mut writer, shown)| {
                Timeout::new(millis(shown.delay), move || {
                    let next = writer.frames().next();
                    if let Some(next) = next {
                        handle.set(Some((writer, next)));
                    }
                })
            });
            move || drop(pending)
        });
    }

    {
        let cursor = cursor.clone();
        use_effect_with((), move |_| {
            let mut blink = CursorBlink::default();
            let interval = Interval::new(millis(BLINK_INTERVAL), move || {
                blink = blink.toggled();
                cursor.set(blink);
            });
            move || drop(interval)
        });
    }

    let (text, deleting) = (*typing)
        .as_ref()
        .map(|(writer, shown)| (shown.text.clone(), writer.is_deleting()))
        .unwrap_or_default();

    html! {
        <span class={classes!("typewriter", deleting.then_some("is-deleting"))}>
            <span class="typewriter-text">{text}</span>
            <span
                class={classes!("typewriter-cursor", (!cursor.visible()).then_some("is-hidden"))}
                aria-hidden="true"
            >
                {"|"}
            </span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[hook]
fn use_hover() -> (HoverSwap, Callback<MouseEvent>, Callback<MouseEvent>) {
    let hover = use_state_eq(HoverSwap::default);

    let on_enter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set((*hover).entered()))
    };
    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set((*hover).left()))
    };

    (*hover, on_enter, on_leave)
}

#[derive(Properties, PartialEq)]
pub struct HoverTextProps {
    pub primary: AttrValue,
    pub alternate: AttrValue,
}

/// Shows `alternate` while the pointer is over the text.
#[function_component(HoverText)]
pub fn hover_text(props: &HoverTextProps) -> Html {
    let (hover, on_enter, on_leave) = use_hover();
    let text = hover.pick(props.primary.as_str(), props.alternate.as_str()).to_string();

    html! {
        <span
            class={classes!("hover-text", hover.is_hovered().then_some("is-alternate"))}
            lang={hover.is_hovered().then_some("ar")}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            {text}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResumeLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    pub alternate: AttrValue,
}

/// External link whose label swaps on hover. The target never changes.
#[function_component(ResumeLink)]
pub fn resume_link(props: &ResumeLinkProps) -> Html {
    let (hover, on_enter, on_leave) = use_hover();
    let label = hover.pick(props.label.as_str(), props.alternate.as_str()).to_string();

    html! {
        <a
            class={classes!("resume-link", hover.is_hovered().then_some("is-alternate"))}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <span lang={hover.is_hovered().then_some("ar")}>{label}</span>
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct TechTagsProps {
    pub items: &'static [&'static str],
}

#[function_component(TechTags)]
pub fn tech_tags(props: &TechTagsProps) -> Html {
    html! {
        <ul class="tag-list" aria-label="Technologies used">
            { for props.items.iter().map(|item| html! { <li class="tag">{*item}</li> }) }
        </ul>
    }
}
