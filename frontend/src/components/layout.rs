use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::hooks::use_parallax;
use crate::components::reveal::Reveal;
use crate::theme::Accent;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub tagline: AttrValue,
    #[prop_or(Accent::Azure)]
    pub accent: Accent,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    let offset = use_parallax(0.35, 180.0);
    let accent = use_memo(|accent| accent.class_name(), props.accent);
    let (from, to) = props.accent.gradient();

    html! {
        <header class={classes!("page-hero", (*accent).clone())}>
            <div
                class="hero-glow"
                style={format!(
                    "transform: translate3d(0, {offset:.1}px, 0); background: radial-gradient(circle, {from}55 0%, {to}00 70%);"
                )}
            ></div>
            <div class="hero-content">
                <Reveal>
                    <span class="eyebrow accent-text">{ &props.eyebrow }</span>
                    <h1>{ &props.title }</h1>
                    <p class="hero-subtitle">{ &props.tagline }</p>
                    { for props.children.iter() }
                </Reveal>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal class="section-header">
            <h2>{ &props.title }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p>{ subtitle }</p>
            }
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub title: AttrValue,
    pub body: AttrValue,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    html! {
        <section class="footer-cta">
            <Reveal class="footer-content">
                <h2>{ &props.title }</h2>
                <p class="subtitle">{ &props.body }</p>
                <Link<Route> to={Route::Contact} classes="forward-link">
                    <button class="hero-cta">{"Talk to us"}</button>
                </Link<Route>>
            </Reveal>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <Link<Route> to={Route::Home} classes="nav-logo">{"krovos"}</Link<Route>>
                    <p>{"Engineering, automation and talent for teams that ship."}</p>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <Link<Route> to={Route::AiAutomation}>{"AI Automation"}</Link<Route>>
                    <Link<Route> to={Route::CustomSoftware}>{"Custom Software"}</Link<Route>>
                    <Link<Route> to={Route::DigitalMarketing}>{"Digital Marketing"}</Link<Route>>
                    <Link<Route> to={Route::ManagedIt}>{"Managed IT"}</Link<Route>>
                    <Link<Route> to={Route::TalentSolutions}>{"Talent Solutions"}</Link<Route>>
                </div>
                <div>
                    <h4>{"Solutions"}</h4>
                    <Link<Route> to={Route::CloudSolutions}>{"Cloud"}</Link<Route>>
                    <Link<Route> to={Route::EngineeringSolutions}>{"Engineering"}</Link<Route>>
                    <Link<Route> to={Route::FinanceSolutions}>{"Finance"}</Link<Route>>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
            </div>
            <p class="copyright">{ format!("© {} Krovos. All rights reserved.", year) }</p>
        </footer>
    }
}
