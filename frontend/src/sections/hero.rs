use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config::{EMERGENCY_HREF, HERO_IMAGE, REGION};
use crate::content::{SERVICES_ANCHOR, STATS};
use crate::scroll::go_to_section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let show_services = Callback::from(|_: MouseEvent| go_to_section(SERVICES_ANCHOR));

    html! {
        <section class="hero">
            <div class="hero-background">
                <img src={HERO_IMAGE} alt="Tow Truck" referrerpolicy="no-referrer" />
                <div class="hero-gradient"></div>
            </div>

            <div class="hero-content">
                <div class="hero-text">
                    <div class="hero-badge">
                        <span class="pulse">
                            <span class="pulse-ring"></span>
                            <span class="pulse-dot"></span>
                        </span>
                        {format!("24/7 Einsatzbereit im {}", REGION)}
                    </div>
                    <h1>
                        {"Wir bringen Sie "}<span class="highlight">{"sicher"}</span>{" ans Ziel."}
                    </h1>
                    <p>
                        {"Seit über 40 Jahren Ihr zuverlässiger Partner für Abschlepp- und Bergedienste. \
                          Als ADAC Mobilitätspartner sind wir in Bergheim, Elsdorf und Kerpen für Sie da."}
                    </p>
                    <div class="hero-actions">
                        <a href={EMERGENCY_HREF} class="btn-emergency hero-call">
                            <IconView icon={Icon::Phone} size={20} />
                            {"Jetzt Hilfe anfordern"}
                        </a>
                        <button class="hero-secondary" onclick={show_services}>
                            {"Unsere Leistungen"}
                            <IconView icon={Icon::ArrowRight} size={18} />
                        </button>
                    </div>
                </div>
            </div>

            <div class="hero-stats glass">
                {
                    STATS.iter().enumerate().map(|(index, stat)| html! {
                        <>
                            if index > 0 {
                                <div class="stat-divider"></div>
                            }
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        </>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: var(--slate-900);
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.4;
                }

                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, var(--slate-900), rgba(15, 23, 42, 0.6), transparent);
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    width: 100%;
                }

                .hero-text {
                    max-width: 42rem;
                    opacity: 0;
                    animation: heroSlideIn 0.8s ease forwards;
                }

                @keyframes heroSlideIn {
                    from {
                        opacity: 0;
                        transform: translateX(-50px);
                    }
                    to {
                        opacity: 1;
                        transform: translateX(0);
                    }
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 204, 0, 0.2);
                    border: 1px solid rgba(255, 204, 0, 0.3);
                    color: var(--brand-yellow);
                    font-weight: 600;
                    font-size: 0.875rem;
                }

                .pulse {
                    position: relative;
                    display: flex;
                    width: 0.5rem;
                    height: 0.5rem;
                }

                .pulse-ring,
                .pulse-dot {
                    position: absolute;
                    width: 100%;
                    height: 100%;
                    border-radius: 9999px;
                    background: var(--brand-yellow);
                }

                .pulse-ring {
                    opacity: 0.75;
                    animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                @keyframes ping {
                    75%, 100% {
                        transform: scale(2);
                        opacity: 0;
                    }
                }

                .hero h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }

                .hero h1 .highlight {
                    color: var(--brand-yellow);
                }

                .hero-text p {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: var(--slate-300);
                    margin-bottom: 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .hero-call {
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                }

                .hero-secondary {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 0.75rem;
                    color: #fff;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .hero-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .hero-stats {
                    position: absolute;
                    bottom: 3rem;
                    right: 1.5rem;
                    display: none;
                    gap: 3rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    opacity: 0;
                    animation: fadeUp 0.5s ease 0.5s forwards;
                }

                .stat-divider {
                    width: 1px;
                    height: 3rem;
                    background: var(--slate-200);
                }

                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: var(--brand-blue);
                }

                .stat-label {
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: var(--slate-500);
                }

                @media (min-width: 640px) {
                    .hero-actions {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .hero h1 {
                        font-size: 4.5rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-stats {
                        display: flex;
                    }
                }
                "#}
            </style>
        </section>
    }
}
