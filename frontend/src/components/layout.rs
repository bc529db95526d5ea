use crate::components::icons::{CloseIcon, CodeIcon, MenuIcon};
use leptos::*;

pub const BRAND: &str = "WebWizards";

const NAV_LINKS: &[(&str, &str)] = &[("Home", "#"), ("About", "#"), ("Contact", "#")];

/// Classes for the nav list; small screens only show it while the menu is open.
pub fn nav_class(menu_open: bool) -> String {
    let visibility = if menu_open { "flex" } else { "hidden" };
    format!(
        "{} md:flex absolute md:relative top-full left-0 right-0 bg-white md:top-auto md:left-auto md:right-auto flex-col md:flex-row items-start md:items-center ml-auto md:gap-6 p-4 md:p-0 shadow-md md:shadow-none",
        visibility
    )
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="px-4 lg:px-6 h-14 flex items-center bg-white shadow-sm relative z-10">
            <a class="flex items-center justify-center" href="#">
                <CodeIcon class="h-6 w-6 text-blue-500"/>
                <span class="ml-2 font-bold text-lg">{BRAND}</span>
            </a>
            <button
                type="button"
                class="ml-auto md:hidden"
                on:click=toggle_menu
                aria-expanded=move || menu_open.get().to_string()
                aria-controls="site-nav"
            >
                <span class="sr-only">
                    {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                </span>
                <Show
                    when=move || menu_open.get()
                    fallback=|| view! { <MenuIcon class="h-6 w-6"/> }
                >
                    <CloseIcon class="h-6 w-6"/>
                </Show>
            </button>
            <nav id="site-nav" class=move || nav_class(menu_open.get())>
                {NAV_LINKS
                    .iter()
                    .map(move |(label, href)| {
                        view! {
                            <a
                                class="text-sm font-medium hover:text-blue-500 transition-colors py-2 md:py-0"
                                href=*href
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="flex flex-col gap-2 sm:flex-row py-6 w-full shrink-0 items-center px-4 md:px-6 border-t bg-white">
            <p class="text-xs text-gray-500">"© 2024 WebWizards. All rights reserved."</p>
            <nav class="sm:ml-auto flex gap-4 sm:gap-6">
                <a class="text-xs hover:underline underline-offset-4" href="#">"Terms of Service"</a>
                <a class="text-xs hover:underline underline-offset-4" href="#">"Privacy Policy"</a>
            </nav>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_is_hidden_on_small_screens_until_opened() {
        assert!(nav_class(false).starts_with("hidden md:flex"));
        assert!(nav_class(true).starts_with("flex md:flex"));
    }
}
