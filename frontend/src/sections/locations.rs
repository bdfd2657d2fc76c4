use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{all_locations_href, dial_href, route_href, LOCATIONS, LOCATIONS_ANCHOR};

#[function_component(Locations)]
pub fn locations() -> Html {
    html! {
        <section id={LOCATIONS_ANCHOR} class="locations">
            <div class="section-inner">
                <div class="locations-header">
                    <div>
                        <h2>{"Immer in Ihrer Nähe"}</h2>
                        <p>{"Besuchen Sie uns an einem unserer drei Standorte im Rhein-Erft-Kreis."}</p>
                    </div>
                    <a class="map-link" href={all_locations_href()} target="_blank" rel="noopener noreferrer">
                        {"Alle Standorte auf der Karte"}
                        <IconView icon={Icon::MapPin} size={18} />
                    </a>
                </div>

                <div class="locations-grid">
                    {
                        LOCATIONS.iter().map(|loc| html! {
                            <div key={loc.city} class="location-card">
                                <h3>{loc.city}</h3>
                                <div class="location-details">
                                    <div class="location-row">
                                        <IconView icon={Icon::MapPin} size={20} class={classes!("row-icon")} />
                                        <span>{loc.address}</span>
                                    </div>
                                    <div class="location-row">
                                        <IconView icon={Icon::Phone} size={20} class={classes!("row-icon")} />
                                        <a href={dial_href(loc.phone)}>{loc.phone}</a>
                                    </div>
                                </div>
                                <a class="route-button" href={route_href(loc.address)} target="_blank" rel="noopener noreferrer">
                                    {"Route planen"}
                                </a>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .locations {
                    padding: 6rem 0;
                    background: #fff;
                }

                .locations-header {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .locations-header h2 {
                    margin-bottom: 1rem;
                }

                .locations-header p {
                    font-size: 1.125rem;
                    color: var(--slate-600);
                }

                .map-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    align-self: flex-start;
                    padding-bottom: 0.25rem;
                    border-bottom: 2px solid var(--brand-blue);
                    color: var(--brand-blue);
                    font-weight: 700;
                    text-decoration: none;
                }

                .locations-grid {
                    display: grid;
                    gap: 2rem;
                }

                .location-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--slate-50);
                    border: 1px solid var(--slate-100);
                    transition: box-shadow 0.3s ease;
                }

                .location-card:hover {
                    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.1);
                }

                .location-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--slate-900);
                    margin-bottom: 1rem;
                }

                .location-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    color: var(--slate-600);
                }

                .location-row {
                    display: flex;
                    gap: 0.75rem;
                }

                .location-row .row-icon {
                    flex-shrink: 0;
                    color: var(--brand-blue);
                }

                .location-row a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .location-row a:hover {
                    color: var(--brand-blue);
                }

                .route-button {
                    display: block;
                    margin-top: 2rem;
                    padding: 0.75rem;
                    text-align: center;
                    border: 1px solid var(--slate-200);
                    border-radius: 0.75rem;
                    font-weight: 600;
                    color: var(--slate-900);
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .route-button:hover {
                    background: #fff;
                    border-color: var(--brand-blue);
                }

                @media (min-width: 768px) {
                    .locations-header {
                        flex-direction: row;
                        align-items: flex-end;
                    }

                    .map-link {
                        align-self: auto;
                    }

                    .locations-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
