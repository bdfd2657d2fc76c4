use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config::ABOUT_IMAGE;
use crate::content::{ABOUT_ANCHOR, HIGHLIGHTS, TESTIMONIAL};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={ABOUT_ANCHOR} class="about">
            <div class="section-inner about-grid">
                <div class="about-media">
                    <div class="about-image">
                        <img src={ABOUT_IMAGE} alt="Our Team" referrerpolicy="no-referrer" />
                    </div>
                    <div class="testimonial glass">
                        <div class="testimonial-badge">
                            <div class="badge-circle">
                                <IconView icon={Icon::ShieldCheck} />
                            </div>
                            <span>{TESTIMONIAL.badge}</span>
                        </div>
                        <p class="testimonial-quote">{format!("\"{}\"", TESTIMONIAL.quote)}</p>
                        <div class="testimonial-author">{format!("— {}", TESTIMONIAL.author)}</div>
                    </div>
                </div>

                <div>
                    <h2>{"Warum Poulwey?"}</h2>
                    <div class="highlights">
                        {
                            HIGHLIGHTS.iter().map(|item| html! {
                                <div key={item.title} class="highlight">
                                    <div class="highlight-icon">
                                        <IconView icon={item.icon} />
                                    </div>
                                    <div>
                                        <h4>{item.title}</h4>
                                        <p>{item.description}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="about-action">
                        <button class="btn-primary">{"Unsere Geschichte entdecken"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 6rem 0;
                    background: var(--slate-50);
                    position: relative;
                    overflow: hidden;
                }

                .about-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }

                .about-media {
                    position: relative;
                }

                .about-image {
                    aspect-ratio: 1 / 1;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.25);
                }

                .about-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .testimonial {
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    max-width: 20rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
                    display: none;
                }

                .testimonial-badge {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    font-weight: 700;
                    color: var(--slate-900);
                }

                .badge-circle {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: var(--brand-yellow);
                    color: var(--brand-blue);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .testimonial-quote {
                    font-size: 0.875rem;
                    font-style: italic;
                    color: var(--slate-600);
                }

                .testimonial-author {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--brand-blue);
                }

                .about h2 {
                    margin-bottom: 2rem;
                }

                .highlights {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .highlight {
                    display: flex;
                    gap: 1.5rem;
                }

                .highlight-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--brand-blue);
                }

                .highlight h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: var(--slate-900);
                    margin-bottom: 0.5rem;
                }

                .highlight p {
                    color: var(--slate-600);
                }

                .about-action {
                    margin-top: 3rem;
                }

                @media (min-width: 768px) {
                    .testimonial {
                        display: block;
                    }
                }

                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
