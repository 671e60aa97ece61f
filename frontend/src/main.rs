use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod icons;
mod styles;
mod theme;
mod animation {
    pub mod counter;
    pub mod easing;
    pub mod frame;
    pub mod hooks;
    pub mod parallax;
    pub mod reveal;
}
mod state {
    pub mod accordion;
    pub mod carousel;
}
mod contact {
    pub mod error;
    pub mod form;
    pub mod submit;
}
mod components {
    pub mod bento;
    pub mod contact_form;
    pub mod counter;
    pub mod faq;
    pub mod jobs;
    pub mod layout;
    pub mod reveal;
    pub mod testimonials;
}
mod pages {
    pub mod careers;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod offering;
    pub mod services {
        pub mod ai_automation;
        pub mod custom_software;
        pub mod digital_marketing;
        pub mod managed_it;
        pub mod talent_solutions;
    }
    pub mod solutions {
        pub mod cloud;
        pub mod engineering;
        pub mod finance;
    }
}

use components::layout::Footer;
use pages::{
    careers::Careers,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    services::{
        ai_automation::AiAutomation,
        custom_software::CustomSoftware,
        digital_marketing::DigitalMarketing,
        managed_it::ManagedIt,
        talent_solutions::TalentSolutions,
    },
    solutions::{
        cloud::CloudSolutions,
        engineering::EngineeringSolutions,
        finance::FinanceSolutions,
    },
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[at("/services/ai-automation")]
    AiAutomation,
    #[at("/services/custom-software")]
    CustomSoftware,
    #[at("/services/digital-marketing")]
    DigitalMarketing,
    #[at("/services/managed-it")]
    ManagedIt,
    #[at("/services/talent-solutions")]
    TalentSolutions,
    #[at("/solutions/cloud")]
    CloudSolutions,
    #[at("/solutions/engineering")]
    EngineeringSolutions,
    #[at("/solutions/finance")]
    FinanceSolutions,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    info!("Rendering {:?} page", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Careers => html! { <Careers /> },
        Route::Contact => html! { <Contact /> },
        Route::AiAutomation => html! { <AiAutomation /> },
        Route::CustomSoftware => html! { <CustomSoftware /> },
        Route::DigitalMarketing => html! { <DigitalMarketing /> },
        Route::ManagedIt => html! { <ManagedIt /> },
        Route::TalentSolutions => html! { <TalentSolutions /> },
        Route::CloudSolutions => html! { <CloudSolutions /> },
        Route::EngineeringSolutions => html! { <EngineeringSolutions /> },
        Route::FinanceSolutions => html! { <FinanceSolutions /> },
        Route::NotFound => html! { <NotFound /> },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let scroll_top = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                    log::warn!("Failed to attach nav scroll listener: {:?}", e);
                }
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"krovos"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <div class="nav-group">
                        <span class="nav-group-label">{"Services"}</span>
                        <div class="nav-dropdown">
                            <Link<Route> to={Route::AiAutomation} classes="nav-link">{"AI Automation"}</Link<Route>>
                            <Link<Route> to={Route::CustomSoftware} classes="nav-link">{"Custom Software"}</Link<Route>>
                            <Link<Route> to={Route::DigitalMarketing} classes="nav-link">{"Digital Marketing"}</Link<Route>>
                            <Link<Route> to={Route::ManagedIt} classes="nav-link">{"Managed IT"}</Link<Route>>
                            <Link<Route> to={Route::TalentSolutions} classes="nav-link">{"Talent Solutions"}</Link<Route>>
                        </div>
                    </div>
                    <div class="nav-group">
                        <span class="nav-group-label">{"Solutions"}</span>
                        <div class="nav-dropdown">
                            <Link<Route> to={Route::CloudSolutions} classes="nav-link">{"Cloud"}</Link<Route>>
                            <Link<Route> to={Route::EngineeringSolutions} classes="nav-link">{"Engineering"}</Link<Route>>
                            <Link<Route> to={Route::FinanceSolutions} classes="nav-link">{"Finance"}</Link<Route>>
                        </div>
                    </div>
                    <Link<Route> to={Route::Careers} classes="nav-link">{"Careers"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="nav-login-button">{"Contact"}</Link<Route>>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ styles::SITE_STYLES }</style>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_route() {
        let expected = [
            ("/", Route::Home),
            ("/careers", Route::Careers),
            ("/contact", Route::Contact),
            ("/services/ai-automation", Route::AiAutomation),
            ("/services/custom-software", Route::CustomSoftware),
            ("/services/digital-marketing", Route::DigitalMarketing),
            ("/services/managed-it", Route::ManagedIt),
            ("/services/talent-solutions", Route::TalentSolutions),
            ("/solutions/cloud", Route::CloudSolutions),
            ("/solutions/engineering", Route::EngineeringSolutions),
            ("/solutions/finance", Route::FinanceSolutions),
        ];
        for (path, route) in expected {
            assert_eq!(Route::recognize(path), Some(route.clone()), "{path}");
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
