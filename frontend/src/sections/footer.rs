use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config::{
    mailto_href, COMPANY_NAME, CONTACT_MAIL, EMERGENCY_HREF, EMERGENCY_PHONE, HEAD_OFFICE_CITY,
    HEAD_OFFICE_STREET, LEGAL_NAME,
};
use crate::content::{FooterLink, CONTACT_ANCHOR, FOOTER_COMPANY, FOOTER_SERVICES};
use crate::scroll::go_to_section;
use crate::Route;

const FOOTER_STYLES: &str = r#"
    .site-footer {
        padding: 5rem 0;
        background: var(--slate-900);
        color: var(--slate-400);
    }

    .footer-grid {
        display: grid;
        gap: 3rem;
        margin-bottom: 4rem;
    }

    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 2rem;
    }

    .footer-brand span {
        font-family: var(--font-display);
        font-size: 1.25rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        color: #fff;
    }

    .footer-badge {
        width: 2rem;
        height: 2rem;
        border-radius: 0.25rem;
        background: var(--brand-blue);
        color: var(--brand-yellow);
        display: flex;
        align-items: center;
        justify-content: center;
    }

    .footer-blurb {
        line-height: 1.6;
        margin-bottom: 2rem;
    }

    .footer-social {
        display: flex;
        gap: 1rem;
    }

    .social-circle {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: var(--slate-800);
        color: inherit;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: all 0.2s ease;
    }

    .social-circle:hover {
        background: var(--brand-blue);
        color: #fff;
    }

    .site-footer h4 {
        color: #fff;
        font-weight: 700;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin-bottom: 2rem;
    }

    .footer-list,
    .footer-contact {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
    }

    .footer-list {
        gap: 1rem;
    }

    .footer-list li {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        transition: color 0.2s ease;
    }

    .footer-link {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0;
        background: none;
        border: none;
        font: inherit;
        color: inherit;
        text-align: left;
        cursor: pointer;
        transition: color 0.2s ease;
    }

    .footer-link:hover {
        color: #fff;
    }

    .footer-link:focus-visible {
        outline: 2px solid var(--brand-yellow);
        outline-offset: 2px;
    }

    .list-chevron,
    .contact-icon {
        flex-shrink: 0;
        color: var(--brand-yellow);
    }

    .footer-contact {
        gap: 1.5rem;
    }

    .footer-contact li {
        display: flex;
        gap: 1rem;
    }

    .site-footer a {
        color: inherit;
        text-decoration: none;
        transition: color 0.2s ease;
    }

    .site-footer a:hover {
        color: #fff;
    }

    .footer-bottom {
        padding-top: 3rem;
        border-top: 1px solid var(--slate-800);
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        align-items: center;
        gap: 1.5rem;
        font-size: 0.875rem;
    }

    .legal-links {
        display: flex;
        gap: 2rem;
    }

    @media (min-width: 768px) {
        .footer-grid {
            grid-template-columns: repeat(2, 1fr);
        }

        .footer-bottom {
            flex-direction: row;
        }
    }

    @media (min-width: 1024px) {
        .footer-grid {
            grid-template-columns: repeat(4, 1fr);
        }
    }
"#;

fn link_list(links: &[FooterLink]) -> Html {
    links
        .iter()
        .map(|link| {
            let chevron = html! {
                <IconView icon={Icon::ChevronRight} size={14} class={classes!("list-chevron")} />
            };
            match link.anchor {
                Some(anchor) => html! {
                    <li key={link.label}>
                        <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| go_to_section(anchor))}>
                            {chevron}
                            {link.label}
                        </button>
                    </li>
                },
                None => html! {
                    <li key={link.label}>
                        {chevron}
                        {link.label}
                    </li>
                },
            }
        })
        .collect()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer id={CONTACT_ANCHOR} class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <div class="footer-badge">
                                <IconView icon={Icon::Truck} size={20} />
                            </div>
                            <span>{COMPANY_NAME}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Ihr kompetenter Partner für Abschlepp- und Bergedienste im Rhein-Erft-Kreis. \
                              Zuverlässig, schnell und professionell."}
                        </p>
                        <div class="footer-social">
                            <a href={mailto_href()} class="social-circle" aria-label="E-Mail">
                                <IconView icon={Icon::Mail} size={18} />
                            </a>
                        </div>
                    </div>

                    <div>
                        <h4>{"Leistungen"}</h4>
                        <ul class="footer-list">{ link_list(&FOOTER_SERVICES) }</ul>
                    </div>

                    <div>
                        <h4>{"Unternehmen"}</h4>
                        <ul class="footer-list">{ link_list(&FOOTER_COMPANY) }</ul>
                    </div>

                    <div>
                        <h4>{"Kontakt"}</h4>
                        <ul class="footer-contact">
                            <li>
                                <IconView icon={Icon::MapPin} size={20} class={classes!("contact-icon")} />
                                <span>{HEAD_OFFICE_STREET}<br />{HEAD_OFFICE_CITY}</span>
                            </li>
                            <li>
                                <IconView icon={Icon::Phone} size={20} class={classes!("contact-icon")} />
                                <a href={EMERGENCY_HREF}>{EMERGENCY_PHONE}</a>
                            </li>
                            <li>
                                <IconView icon={Icon::Mail} size={20} class={classes!("contact-icon")} />
                                <a href={mailto_href()}>{CONTACT_MAIL}</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. Alle Rechte vorbehalten.", year, LEGAL_NAME)}</p>
                    <div class="legal-links">
                        <Link<Route> to={Route::Impressum}>{"Impressum"}</Link<Route>>
                        <Link<Route> to={Route::Privacy}>{"Datenschutz"}</Link<Route>>
                        <Link<Route> to={Route::Terms}>{"AGB"}</Link<Route>>
                    </div>
                </div>
            </div>

            <style>{FOOTER_STYLES}</style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact_styles() -> String {
        FOOTER_STYLES.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn linked_entries_are_focusable_buttons() {
        let compact = compact_styles();
        assert!(compact.contains(".footer-link:focus-visible { outline: 2px solid var(--brand-yellow);"));
        assert!(compact.contains("background: none; border: none; font: inherit; color: inherit;"));
        assert!(!compact.contains("li.linked"));
    }

    #[test]
    fn every_service_entry_leads_somewhere() {
        assert!(FOOTER_SERVICES.iter().all(|link| link.anchor.is_some()));
    }
}
