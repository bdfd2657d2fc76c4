use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config::{COMPANY_NAME, EMERGENCY_HREF, EMERGENCY_PHONE, MOBILE_BREAKPOINT};
use crate::content::{section_anchor, NAV_ITEMS};
use crate::scroll::{go_to_section, scroll_to_top, use_nav_style, PendingSection, ScrollMode};
use crate::state::{MenuAction, MenuState};
use crate::Route;

const NAV_STYLES: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        padding: 1.5rem 0;
        background: transparent;
        transition: all 0.3s ease;
    }

    .top-nav.scrolled {
        padding: 0.75rem 0;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(12px);
        -webkit-backdrop-filter: blur(12px);
        box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
    }

    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        cursor: pointer;
    }

    .logo-badge {
        width: 2.5rem;
        height: 2.5rem;
        background: var(--brand-blue);
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: var(--brand-yellow);
    }

    .logo-text {
        font-family: var(--font-display);
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
    }

    .top-nav.scrolled .logo-text {
        color: var(--slate-900);
    }

    .nav-links {
        display: none;
        align-items: center;
        gap: 2rem;
    }

    .nav-link {
        background: none;
        border: none;
        font: inherit;
        font-weight: 500;
        cursor: pointer;
        color: rgba(255, 255, 255, 0.9);
        transition: color 0.2s ease;
    }

    .top-nav.scrolled .nav-link {
        color: var(--slate-600);
    }

    .nav-link:hover {
        color: var(--brand-yellow);
    }

    .menu-toggle {
        background: none;
        border: none;
        cursor: pointer;
        color: #fff;
    }

    .top-nav.scrolled .menu-toggle,
    .menu-toggle.open {
        color: var(--slate-900);
    }

    .mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 40;
        background: #fff;
        padding: 6rem 1.5rem 0;
        opacity: 0;
        transform: translateY(-20px);
        visibility: hidden;
        pointer-events: none;
        transition: opacity 0.3s ease, transform 0.3s ease, visibility 0.3s;
    }

    .mobile-menu.open {
        opacity: 1;
        transform: translateY(0);
        visibility: visible;
        pointer-events: auto;
    }

    .mobile-menu-items {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .mobile-link {
        background: none;
        border: none;
        border-bottom: 1px solid var(--slate-100);
        padding: 0 0 1rem;
        text-align: left;
        font-family: var(--font-display);
        font-size: 1.5rem;
        font-weight: 700;
        color: var(--slate-900);
        cursor: pointer;
    }

    .mobile-menu .btn-emergency {
        justify-content: center;
        padding: 1.25rem;
        font-size: 1.25rem;
    }
"#;

/// Rules applied from `MOBILE_BREAKPOINT` upwards.
const NAV_DESKTOP_STYLES: &str = r#"
        .nav-links {
            display: flex;
        }

        .menu-toggle,
        .mobile-menu {
            display: none;
        }
"#;

fn nav_styles() -> String {
    format!(
        "{}\n    @media (min-width: {}px) {{{}    }}\n",
        NAV_STYLES, MOBILE_BREAKPOINT, NAV_DESKTOP_STYLES
    )
}

/// Where a nav label leads from the current route.
#[derive(Clone, Debug, PartialEq, Eq)]
enum NavTarget {
    /// Scroll within the landing page.
    Section(String),
    /// Route back to the landing page, which then scrolls to the section.
    Landing(String),
}

/// Resolves a nav label click. The overlay always closes, even when the
/// anchor turns out to be missing.
fn label_selection(label: &str, on_landing: bool) -> (NavTarget, MenuAction) {
    let anchor = section_anchor(label);
    let target = if on_landing {
        NavTarget::Section(anchor)
    } else {
        NavTarget::Landing(anchor)
    };
    (target, MenuAction::Close)
}

fn follow(target: NavTarget, navigator: Option<&Navigator>) {
    match target {
        NavTarget::Section(anchor) => go_to_section(&anchor),
        NavTarget::Landing(anchor) => match navigator {
            Some(navigator) => {
                info!("Leaving sub page for #{}", anchor);
                navigator.push_with_state(&Route::Home, PendingSection(anchor));
            }
            None => warn!("No navigator to reach #{}", anchor),
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);
    let nav_style = use_nav_style();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_landing = matches!(route, Some(Route::Home) | None);
    let solid = nav_style.is_solid();

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let select = {
        let menu = menu.dispatcher();
        let navigator = navigator.clone();
        Callback::from(move |label: &'static str| {
            let (target, action) = label_selection(label, on_landing);
            menu.dispatch(action);
            follow(target, navigator.as_ref());
        })
    };

    let go_home = {
        let menu = menu.dispatcher();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Close);
            if on_landing {
                if let Err(err) = scroll_to_top(ScrollMode::Animated) {
                    warn!("Scroll to top skipped: {}", err);
                }
            } else if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", solid.then(|| "scrolled"))}>
                <div class="nav-content">
                    <div class="nav-logo" onclick={go_home}>
                        <div class="logo-badge">
                            <IconView icon={Icon::Truck} class={classes!("logo-truck")} />
                        </div>
                        <span class="logo-text">{COMPANY_NAME}</span>
                    </div>

                    <div class="nav-links">
                        {
                            NAV_ITEMS.iter().map(|label| {
                                let select = select.clone();
                                let label: &'static str = *label;
                                html! {
                                    <button key={label} class="nav-link" onclick={Callback::from(move |_: MouseEvent| select.emit(label))}>
                                        {label}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                        <a href={EMERGENCY_HREF} class="btn-emergency">
                            <IconView icon={Icon::Phone} size={18} />
                            {EMERGENCY_PHONE}
                        </a>
                    </div>

                    <button class={classes!("menu-toggle", menu.open.then(|| "open"))} aria-label="Menü" onclick={toggle_menu}>
                        <IconView icon={if menu.open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
            </nav>
            <MobileMenu open={menu.open} on_select={select} />
            <style>{nav_styles()}</style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_select: Callback<&'static str>,
}

/// Full screen link panel for narrow viewports. Stays mounted so the
/// fade-and-slide transition runs on both open and close.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <div class={classes!("mobile-menu", props.open.then(|| "open"))} aria-hidden={(!props.open).to_string()}>
            <div class="mobile-menu-items">
                {
                    NAV_ITEMS.iter().map(|label| {
                        let on_select = props.on_select.clone();
                        let label: &'static str = *label;
                        html! {
                            <button key={label} class="mobile-link" onclick={Callback::from(move |_: MouseEvent| on_select.emit(label))}>
                                {label}
                            </button>
                        }
                    }).collect::<Html>()
                }
                <a href={EMERGENCY_HREF} class="btn-emergency">
                    <IconView icon={Icon::Phone} />
                    {format!("Notruf: {}", EMERGENCY_PHONE)}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact_styles() -> String {
        nav_styles().split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn desktop_breakpoint_swaps_toggle_for_link_row() {
        let compact = compact_styles();
        let query = format!("@media (min-width: {}px) {{", MOBILE_BREAKPOINT);
        let split = compact.find(&query).expect("breakpoint query");
        let (mobile, desktop) = compact.split_at(split);

        assert!(mobile.contains(".nav-links { display: none;"));
        assert!(desktop.contains(".nav-links { display: flex; }"));
        assert!(desktop.contains(".menu-toggle, .mobile-menu { display: none; } }"));
    }

    #[test]
    fn hidden_menu_is_not_interactive() {
        let compact = compact_styles();
        assert!(compact.contains("visibility: hidden; pointer-events: none;"));
        assert!(compact.contains(".mobile-menu.open { opacity: 1; transform: translateY(0);"));
    }

    #[test]
    fn labels_scroll_in_place_on_landing_page() {
        let anchors = ["leistungen", "standorte", "über-uns", "kontakt"];
        for (label, anchor) in NAV_ITEMS.iter().zip(anchors) {
            assert_eq!(
                label_selection(label, true),
                (NavTarget::Section(anchor.to_string()), MenuAction::Close)
            );
        }
    }

    #[test]
    fn labels_carry_anchor_back_from_sub_pages() {
        for label in NAV_ITEMS.iter() {
            let (target, action) = label_selection(label, false);
            assert_eq!(target, NavTarget::Landing(section_anchor(label)));
            assert_eq!(action, MenuAction::Close);
        }
    }
}
