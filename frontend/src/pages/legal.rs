use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{
    mailto_href, CONTACT_MAIL, EMERGENCY_HREF, EMERGENCY_PHONE, HEAD_OFFICE_CITY,
    HEAD_OFFICE_STREET, LEGAL_NAME,
};
use crate::scroll::reset_scroll;
use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    #[prop_or_default]
    class: Classes,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    // Routed pages open at the top, not at the landing page offset
    use_effect_with_deps(
        move |_| {
            reset_scroll();
            || ()
        },
        (),
    );

    html! {
        <div class={classes!("legal-content", props.class.clone())}>
            <div>
                <h1>{props.title.clone()}</h1>
                { for props.children.iter() }
                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Startseite"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Impressum}>{"Impressum"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Datenschutz"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Terms}>{"AGB"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: var(--slate-900);
                    padding: 8rem 1.5rem 4rem;
                    color: var(--slate-300);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .legal-content > div {
                    max-width: 48rem;
                    width: 100%;
                }

                .legal-content h1 {
                    color: #fff;
                    margin-bottom: 2.5rem;
                }

                .legal-content section {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid var(--slate-800);
                    border-radius: 0.75rem;
                    padding: 2rem;
                    margin: 1.5rem 0;
                }

                .legal-content h2 {
                    font-size: 1.25rem;
                    color: var(--brand-yellow);
                    margin-bottom: 1rem;
                }

                .legal-content p,
                .legal-content li {
                    line-height: 1.7;
                }

                .legal-content a {
                    color: var(--brand-yellow);
                }

                .legal-links {
                    margin-top: 3rem;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Impressum)]
pub fn impressum() -> Html {
    html! {
        <LegalPage title="Impressum" class={classes!("impressum")}>
            <section>
                <h2>{"Angaben gemäß § 5 DDG"}</h2>
                <p>{LEGAL_NAME}</p>
                <p>{HEAD_OFFICE_STREET}<br />{HEAD_OFFICE_CITY}</p>
            </section>

            <section>
                <h2>{"Kontakt"}</h2>
                <p>{"Telefon: "}<a href={EMERGENCY_HREF}>{EMERGENCY_PHONE}</a></p>
                <p>{"E-Mail: "}<a href={mailto_href()}>{CONTACT_MAIL}</a></p>
            </section>

            <section>
                <h2>{"Verbraucherstreitbeilegung"}</h2>
                <p>{"Wir sind nicht bereit oder verpflichtet, an Streitbeilegungsverfahren vor einer Verbraucherschlichtungsstelle teilzunehmen."}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Datenschutzerklärung" class={classes!("privacy-policy")}>
            <section>
                <h2>{"1. Verantwortlicher"}</h2>
                <p>{format!("{}, {}, {}", LEGAL_NAME, HEAD_OFFICE_STREET, HEAD_OFFICE_CITY)}</p>
            </section>

            <section>
                <h2>{"2. Keine Speicherung auf dieser Website"}</h2>
                <p>{"Diese Website setzt keine Cookies, bietet keine Formulare an und speichert keine personenbezogenen Daten."}</p>
            </section>

            <section>
                <h2>{"3. Externe Inhalte"}</h2>
                <p>{"Bilder werden von einem externen Anbieter geladen. Dabei wird Ihre IP-Adresse an diesen Anbieter übermittelt. Ein Referrer wird nicht gesendet."}</p>
                <p>{"Links zur Routenplanung öffnen Google Maps in einem neuen Fenster. Erst dann gelten die Datenschutzbestimmungen von Google."}</p>
            </section>

            <section>
                <h2>{"4. Kontaktaufnahme"}</h2>
                <p>{"Wenn Sie uns per Telefon oder E-Mail kontaktieren, verarbeiten wir Ihre Angaben ausschließlich zur Abwicklung Ihres Auftrags."}</p>
                <p>{"Anfragen zum Datenschutz: "}<a href={mailto_href()}>{CONTACT_MAIL}</a></p>
            </section>
        </LegalPage>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <LegalPage title="Allgemeine Geschäftsbedingungen" class={classes!("terms-and-conditions")}>
            <section>
                <h2>{"1. Geltungsbereich"}</h2>
                <p>{format!("Diese Bedingungen gelten für alle Abschlepp-, Bergungs- und Transportleistungen der {}.", LEGAL_NAME)}</p>
            </section>

            <section>
                <h2>{"2. Auftragserteilung"}</h2>
                <p>{"Aufträge werden telefonisch oder vor Ort erteilt. Bei Einsätzen im Auftrag des ADAC gelten vorrangig dessen Bedingungen."}</p>
            </section>

            <section>
                <h2>{"3. Vergütung"}</h2>
                <p>{"Die Vergütung richtet sich nach der jeweils gültigen Preisliste, die auf Anfrage zugesandt wird."}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <LegalPage title="Seite nicht gefunden" class={classes!("not-found")}>
            <section>
                <p>{"Die angeforderte Seite existiert nicht. Im Notfall erreichen Sie uns rund um die Uhr unter "}
                    <a href={EMERGENCY_HREF}>{EMERGENCY_PHONE}</a>{"."}
                </p>
            </section>
        </LegalPage>
    }
}
