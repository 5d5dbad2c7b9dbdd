//! The navigation bar shown at the top of every page, and at the bottom on small screens.

use maud::{Markup, html};

use crate::endpoints;

const DESKTOP_LINK_STYLE: &str = "block py-2 px-3 rounded-sm text-gray-900 \
    hover:bg-gray-100 lg:hover:bg-transparent lg:hover:text-blue-700 lg:p-0 \
    dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700";
const DESKTOP_ACTIVE_LINK_STYLE: &str = "block py-2 px-3 rounded-sm text-white \
    bg-blue-700 lg:bg-transparent lg:text-blue-700 lg:p-0 lg:dark:text-blue-500";

const MOBILE_LINK_STYLE: &str = "flex items-center justify-center rounded-lg px-3 py-2 \
    text-sm font-semibold text-gray-600 hover:bg-blue-50 hover:text-blue-700 \
    dark:text-gray-300 dark:hover:bg-blue-900/20";
const MOBILE_ACTIVE_LINK_STYLE: &str = "flex items-center justify-center rounded-lg px-3 py-2 \
    text-sm font-semibold bg-blue-50 text-blue-700 shadow-sm \
    dark:bg-blue-900/30 dark:text-blue-200";

/// A link in the navigation bar.
///
/// Only one link should be current at any one time.
#[derive(Clone, Copy)]
struct NavLink {
    url: &'static str,
    title: &'static str,
    is_current: bool,
}

/// The navigation bar linking the two screens of the app.
pub struct NavBar {
    links: [NavLink; 2],
}

impl NavBar {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as current and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar {
        let link = |url: &'static str, title: &'static str| NavLink {
            url,
            title,
            is_current: active_endpoint == url,
        };

        NavBar {
            links: [
                link(endpoints::TRANSACTIONS_VIEW, "Transactions"),
                link(endpoints::REPORTS_VIEW, "Reports"),
            ],
        }
    }

    /// Render the desktop and mobile versions of the navigation bar.
    pub fn into_html(self) -> Markup {
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div class="max-w-screen-xl flex items-center justify-between mx-auto p-4"
                {
                    a href=(endpoints::ROOT) class="text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Expense Tracker"
                    }

                    ul class="hidden lg:flex lg:space-x-8 font-medium"
                    {
                        @for link in self.links {
                            li
                            {
                                a
                                    href=(link.url)
                                    class=(if link.is_current { DESKTOP_ACTIVE_LINK_STYLE } else { DESKTOP_LINK_STYLE })
                                    aria-current=[link.is_current.then_some("page")]
                                {
                                    (link.title)
                                }
                            }
                        }
                    }
                }
            }

            nav class="fixed inset-x-0 bottom-0 z-40 lg:hidden px-4 pb-4"
            {
                ul
                    class="grid grid-cols-2 gap-2 p-3 rounded-xl border border-gray-200
                        bg-white/95 shadow-lg backdrop-blur dark:border-gray-700 dark:bg-gray-900/95"
                    aria-label="Primary"
                {
                    @for link in self.links {
                        li
                        {
                            a
                                href=(link.url)
                                class=(if link.is_current { MOBILE_ACTIVE_LINK_STYLE } else { MOBILE_LINK_STYLE })
                                aria-current=[link.is_current.then_some("page")]
                            {
                                (link.title)
                            }
                        }
                    }
                }
            }
        )
    }
}
