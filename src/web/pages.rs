//! Handlebars page rendering.
//!
//! All page templates are embedded in the binary and registered once
//! at startup. Every page renders inside the shared `layout` partial,
//! which carries the stylesheet and the flash message slot.

use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::labels::Labels;
use crate::web::session::Session;
use crate::wizard::StepSpec;

/// Registered template registry.
pub struct Pages {
    hb: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> anyhow::Result<Self> {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(false);

        hb.register_template_string("layout", include_str!("../../templates/layout.hbs"))?;
        hb.register_template_string("nav", include_str!("../../templates/nav.hbs"))?;
        hb.register_template_string("language", include_str!("../../templates/language.hbs"))?;
        hb.register_template_string("member_info", include_str!("../../templates/member_info.hbs"))?;
        hb.register_template_string("contact", include_str!("../../templates/contact.hbs"))?;
        hb.register_template_string("documents", include_str!("../../templates/documents.hbs"))?;
        hb.register_template_string("education", include_str!("../../templates/education.hbs"))?;
        hb.register_template_string("professional", include_str!("../../templates/professional.hbs"))?;
        hb.register_template_string("family", include_str!("../../templates/family.hbs"))?;
        hb.register_template_string("payment", include_str!("../../templates/payment.hbs"))?;
        hb.register_template_string("review", include_str!("../../templates/review.hbs"))?;
        hb.register_template_string("thank_you", include_str!("../../templates/thank_you.hbs"))?;

        Ok(Self { hb })
    }

    pub fn render(&self, template: &str, context: &Value) -> Result<String, handlebars::RenderError> {
        self.hb.render(template, context)
    }

    /// Render a data-entry step pre-populated from the session.
    pub fn render_step(
        &self,
        spec: &StepSpec,
        labels: &Labels,
        session: &Session,
    ) -> Result<String, handlebars::RenderError> {
        let context = page_context((spec.section)(&labels.sections), labels, session, spec.index);
        self.render(spec.template, &context)
    }

    /// Render the review summary (step 9).
    pub fn render_review(
        &self,
        labels: &Labels,
        session: &Session,
    ) -> Result<String, handlebars::RenderError> {
        let context = page_context(labels.sections.review, labels, session, crate::wizard::REVIEW_STEP);
        self.render("review", &context)
    }
}

/// Context shared by every wizard page.
pub fn page_context(title: &str, labels: &Labels, session: &Session, step: u8) -> Value {
    json!({
        "title": title,
        "labels": labels,
        "form": session.form,
        "flash": session.flash,
        "step": step,
        "prev_step": step.saturating_sub(1).max(crate::wizard::FIRST_STEP),
    })
}
