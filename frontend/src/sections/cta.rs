use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config::{EMERGENCY_HREF, EMERGENCY_PHONE};

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="cta">
            <div class="cta-glow">
                <div class="glow glow-white"></div>
                <div class="glow glow-yellow"></div>
            </div>
            <div class="cta-content">
                <h2>{"Haben Sie eine Panne oder einen Unfall?"}</h2>
                <p>{"Zögern Sie nicht. Rufen Sie uns direkt an. Wir sind in 20-30 Minuten bei Ihnen."}</p>
                <div class="cta-actions">
                    <a href={EMERGENCY_HREF} class="cta-call">
                        <IconView icon={Icon::Phone} size={28} />
                        {EMERGENCY_PHONE}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .cta {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 0;
                    background: var(--brand-blue);
                }

                .cta-glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }

                .glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .glow-white {
                    top: 0;
                    left: 0;
                    background: #fff;
                    transform: translate(-50%, -50%);
                }

                .glow-yellow {
                    bottom: 0;
                    right: 0;
                    background: var(--brand-yellow);
                    transform: translate(50%, 50%);
                }

                .cta-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .cta h2 {
                    color: #fff;
                    margin-bottom: 2rem;
                }

                .cta p {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.8);
                    margin-bottom: 3rem;
                }

                .cta-actions {
                    display: flex;
                    justify-content: center;
                }

                .cta-call {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2.5rem;
                    border-radius: 1rem;
                    background: #fff;
                    color: var(--brand-blue);
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.2);
                    transition: all 0.2s ease;
                }

                .cta-call:hover {
                    background: var(--brand-yellow);
                }
                "#}
            </style>
        </section>
    }
}
