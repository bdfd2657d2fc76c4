use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{ServiceEntry, CONTACT_ANCHOR, SERVICES, SERVICES_ANCHOR};
use crate::scroll::{go_to_section, use_in_view_once};

/// Cards stay hidden until the grid scrolls into view, then fade up in order.
const SERVICES_STYLES: &str = r#"
    .services {
        padding: 6rem 0;
        background: #fff;
    }

    .section-header {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 4rem;
    }

    .section-header h2 {
        margin-bottom: 1.5rem;
    }

    .section-header p {
        font-size: 1.125rem;
        color: var(--slate-600);
    }

    .services-grid {
        display: grid;
        gap: 2rem;
    }

    .service-card {
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid var(--slate-100);
        background: rgba(248, 250, 252, 0.5);
        transition: all 0.3s ease;
        opacity: 0;
        transform: translateY(20px);
    }

    .services-grid.in-view .service-card {
        animation: fadeUp 0.5s ease forwards;
    }

    .service-card:hover {
        border-color: rgba(0, 59, 122, 0.2);
        box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
    }

    .service-icon {
        width: 3.5rem;
        height: 3.5rem;
        margin-bottom: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #fff;
        border-radius: 0.75rem;
        box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
        color: var(--brand-blue);
        transition: all 0.3s ease;
    }

    .service-card:hover .service-icon {
        background: var(--brand-blue);
        color: #fff;
    }

    .service-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
        color: var(--slate-900);
    }

    .service-card p {
        color: var(--slate-600);
        line-height: 1.6;
        margin-bottom: 1.5rem;
    }

    .service-more {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        background: none;
        border: none;
        padding: 0;
        font: inherit;
        font-weight: 600;
        color: var(--brand-blue);
        cursor: pointer;
        transition: gap 0.2s ease;
    }

    .service-card:hover .service-more {
        gap: 0.75rem;
    }

    @media (min-width: 768px) {
        .services-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }

    @media (min-width: 1024px) {
        .services-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
"#;

fn reveal_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * 0.1)
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: ServiceEntry,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { service, index } = props;
    let delay = reveal_delay(*index);
    let show_contact = Callback::from(|_: MouseEvent| go_to_section(CONTACT_ANCHOR));

    html! {
        <div class="service-card" style={delay}>
            <div class="service-icon">
                <IconView icon={service.icon} size={28} />
            </div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <button class="service-more" onclick={show_contact}>
                {"Mehr erfahren"}
                <IconView icon={Icon::ChevronRight} size={16} />
            </button>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let grid = use_node_ref();
    let in_view = use_in_view_once(grid.clone());

    html! {
        <section id={SERVICES_ANCHOR} class="services">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Umfassender Service für Ihre Mobilität"}</h2>
                    <p>
                        {"Ob Unfall, Panne oder Fahrzeugtransport – wir bieten Ihnen professionelle Lösungen \
                          mit modernster Technik und geschultem Personal."}
                    </p>
                </div>

                <div ref={grid} class={classes!("services-grid", in_view.then(|| "in-view"))}>
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard key={service.title} service={*service} {index} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>{SERVICES_STYLES}</style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_animate_only_once_grid_is_in_view() {
        let compact = SERVICES_STYLES.split_whitespace().collect::<Vec<_>>().join(" ");
        let start = compact.find(".service-card { ").expect("card rule");
        let end = start + compact[start..].find('}').expect("card rule end");
        let card_rule = &compact[start..end];

        assert!(card_rule.contains("opacity: 0;"));
        assert!(!card_rule.contains("animation"));
        assert!(compact.contains(".services-grid.in-view .service-card { animation: fadeUp 0.5s ease forwards; }"));
    }

    #[test]
    fn reveal_delay_staggers_by_tenth_of_second() {
        assert_eq!(reveal_delay(0), "animation-delay: 0.0s;");
        assert_eq!(reveal_delay(3), "animation-delay: 0.3s;");
        assert_eq!(reveal_delay(5), "animation-delay: 0.5s;");
    }
}
