//! Contact form with a simulated send.
//!
//! Nothing leaves the browser: a valid submission waits a fixed delay, then
//! reports success and clears the form.

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Object;
use web_sys::{Document, Event, FormData, HtmlButtonElement, HtmlFormElement};

use crate::components::notification::{show_notification, Severity};
use crate::config::{MSG_MISSING_FIELDS, MSG_SENDING, MSG_THANKS, SUBMIT_DELAY_MS};
use crate::dom;
use crate::error::SetupError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ValidationError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Reads the named fields out of the form's current entries.
    pub fn from_form(form: &HtmlFormElement) -> Result<Self, SetupError> {
        let data = FormData::new_with_form(form)?;
        let entries = Object::from_entries(&data)?;
        serde_wasm_bindgen::from_value(entries.into())
            .map_err(|err| SetupError::Dom(err.to_string()))
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

fn handle_submit(document: &Document, form: &HtmlFormElement, event: Event) {
    event.prevent_default();

    let submission = match ContactSubmission::from_form(form) {
        Ok(submission) => submission,
        Err(err) => {
            warn!("Could not read contact form: {}", err);
            ContactSubmission::default()
        }
    };

    if let Err(err) = submission.validate() {
        debug!("Contact form rejected: {}", err);
        let _ = show_notification(document, MSG_MISSING_FIELDS, Severity::Error);
        return;
    }

    match serde_json::to_string(&submission) {
        Ok(json) => debug!("Contact submission {}", json),
        Err(err) => warn!("Could not serialize submission: {}", err),
    }

    let button = submit_button(form);
    let original_label = button.as_ref().and_then(|b| b.text_content());
    if let Some(button) = &button {
        button.set_text_content(Some(MSG_SENDING));
        button.set_disabled(true);
    }

    let document = document.clone();
    let form = form.clone();
    Timeout::new(SUBMIT_DELAY_MS, move || {
        let _ = show_notification(&document, MSG_THANKS, Severity::Success);
        form.reset();
        if let Some(button) = &button {
            button.set_text_content(original_label.as_deref());
            button.set_disabled(false);
        }
        info!("Contact message accepted");
    })
    .forget();
}

pub fn install(document: &Document, form: HtmlFormElement) -> Result<(), SetupError> {
    let doc = document.clone();
    let target = form.clone();
    dom::listen(&form, "submit", move |event| handle_submit(&doc, &target, event))?;

    info!("Contact form installed");
    Ok(())
}
