use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Navbar counts as scrolled past this many pixels.
const SCROLLED_AFTER: f64 = 30.0;

const LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About Us", "/about"),
    ("Tour Guide", "/tourguide"),
    ("Contact", "/contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);
    let pathname = use_location().pathname;

    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > SCROLLED_AFTER);
    });
    on_cleanup(move || scroll.remove());

    // close the mobile menu whenever the route changes
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    let links = move |mobile: bool| {
        LINKS
            .iter()
            .map(|(name, path)| {
                let class = move || {
                    let active = pathname.get() == *path;
                    match (mobile, active) {
                        (false, true) => "nav-link active",
                        (false, false) => "nav-link",
                        (true, true) => "mobile-link active",
                        (true, false) => "mobile-link",
                    }
                };
                view! {
                    <li>
                        <A href=*path attr:class=class>{*name}</A>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <div class="navbar-container">
                <A href="/" attr:class="navbar-logo">
                    <span class="logo-icon">"🌍"</span>
                    <span class="logo-text">
                        <span class="logo-travel">"Travel"</span>
                        <span class="logo-world">"World"</span>
                    </span>
                </A>

                <ul class="navbar-links">
                    {links(false)}
                    <li><A href="/login" attr:class="login-link">"Login"</A></li>
                    <li><A href="/signup" attr:class="register-btn">"Register"</A></li>
                    <li><A href="/profile" attr:class="profile-btn">"👤 Profile"</A></li>
                </ul>

                <button
                    class=move || if menu_open.get() { "hamburger active" } else { "hamburger" }
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <ul class="mobile-links">
                        {links(true)}
                        <li><A href="/login" attr:class="login-link">"Login"</A></li>
                        <li><A href="/signup" attr:class="register-btn">"Register"</A></li>
                        <li><A href="/profile" attr:class="profile-btn">"👤 Profile"</A></li>
                    </ul>
                </div>
            </Show>
        </nav>
    }
}
