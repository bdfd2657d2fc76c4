use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::sections::{
    about::About, cta::Cta, footer::Footer, hero::Hero, locations::Locations, services::Services,
};
use crate::scroll::{go_to_section, PendingSection};
use crate::structured_data::business_json_ld;

/// Anchor a sub page handed over through history state, if any.
fn pending_anchor(pending: Option<&PendingSection>) -> Option<&str> {
    pending.map(|section| section.0.as_str()).filter(|anchor| !anchor.is_empty())
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let json_ld = use_memo(
        |_| match business_json_ld() {
            Ok(json) => Some(json),
            Err(err) => {
                warn!("Skipping structured data: {}", err);
                None
            }
        },
        (),
    );

    let location = use_location();
    let pending = location.and_then(|location| location.state::<PendingSection>());

    // Runs after the sections are in the DOM
    use_effect_with_deps(
        |pending: &Option<Rc<PendingSection>>| {
            if let Some(anchor) = pending_anchor(pending.as_deref()) {
                debug!("Resuming scroll to #{}", anchor);
                go_to_section(anchor);
            }
            || ()
        },
        pending,
    );

    html! {
        <div class="landing">
            if let Some(json) = (*json_ld).clone() {
                <script type="application/ld+json">{json}</script>
            }
            <Hero />
            <Services />
            <About />
            <Locations />
            <Cta />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_anchor_resumes_handed_over_section() {
        let pending = PendingSection("standorte".to_string());
        assert_eq!(pending_anchor(Some(&pending)), Some("standorte"));
    }

    #[test]
    fn plain_visit_does_not_scroll() {
        assert_eq!(pending_anchor(None), None);
        assert_eq!(pending_anchor(Some(&PendingSection(String::new()))), None);
    }
}
