use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{ArchiveEntry, ARCHIVE, OWNER_NAME};
use crate::frontend::{Route, Spotlight};

fn archive_row(entry: &ArchiveEntry) -> Html {
    html! {
        <tr>
            <td class="archive-year">{entry.year}</td>
            <td class="archive-title">{entry.title}</td>
            <td class="archive-made-at">{entry.made_at}</td>
            <td>
                <ul class="tag-list">
                    { for entry.built_with.iter().map(|tech| html! { <li class="tag">{*tech}</li> }) }
                </ul>
            </td>
            <td>
                if let Some(text) = entry.link_text {
                    <a class="link" href={entry.link} target="_blank" rel="noopener noreferrer">
                        {text}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                }
            </td>
        </tr>
    }
}

#[function_component(Archive)]
pub fn archive() -> Html {
    html! {
        <>
            <Spotlight />
            <div class="page-shell archive-shell">
                <header class="archive-header">
                    <Link<Route> to={Route::Home} classes="back-link">
                        <span aria-hidden="true">{"← "}</span>
                        {OWNER_NAME}
                    </Link<Route>>
                    <h1>{"All Projects"}</h1>
                </header>
                <div class="archive-table-wrap">
                    <table class="archive-table">
                        <thead>
                            <tr>
                                <th scope="col">{"Year"}</th>
                                <th scope="col">{"Project"}</th>
                                <th scope="col">{"Made at"}</th>
                                <th scope="col">{"Built with"}</th>
                                <th scope="col">{"Link"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for ARCHIVE.iter().map(archive_row) }
                        </tbody>
                    </table>
                </div>
            </div>
        </>
    }
}
