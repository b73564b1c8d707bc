//! Pagination Component
//!
//! Previous / numbered / Next links under the players table.

use leptos::prelude::*;

use crate::actions::GotoPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    /// Page the link navigates to
    pub target: u32,
    pub disabled: bool,
    pub active: bool,
}

impl PageLink {
    pub fn class(&self) -> &'static str {
        match (self.active, self.disabled) {
            (true, _) => "page-item active",
            (false, true) => "page-item disabled",
            _ => "page-item",
        }
    }
}

/// Links for `page` of `total_pages`; empty when there is a single page
pub fn page_links(page: u32, total_pages: u32) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let mut links = Vec::with_capacity(total_pages as usize + 2);
    links.push(PageLink {
        label: "Previous".to_string(),
        target: page.saturating_sub(1).max(1),
        disabled: page <= 1,
        active: false,
    });
    links.extend((1..=total_pages).map(|n| PageLink {
        label: n.to_string(),
        target: n,
        disabled: false,
        active: n == page,
    }));
    links.push(PageLink {
        label: "Next".to_string(),
        target: (page + 1).min(total_pages),
        disabled: page >= total_pages,
        active: false,
    });
    links
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        if let Some(GotoPage(target)) = GotoPage::from_event(&ev) {
            if target != page.get_untracked() {
                on_select.run(target);
            }
        }
    };

    view! {
        <nav aria-label="Player pagination">
            <ul class="pagination justify-content-center" on:click=on_click>
                {move || {
                    page_links(page.get(), total_pages.get())
                        .into_iter()
                        .map(|link| {
                            let class = link.class();
                            // Disabled links carry no action so clicks fall through
                            let action = (!link.disabled && !link.active).then_some(GotoPage::ACTION);
                            view! {
                                <li class=class>
                                    <a class="page-link" href="#" data-action=action data-id=link.target.to_string()>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
