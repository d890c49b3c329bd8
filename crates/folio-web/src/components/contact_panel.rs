//! Contact methods, social links and the message form.

use dioxus::prelude::*;
use folio_core::ContactForm;

use crate::browser;
use crate::site::use_site;

#[component]
pub fn ContactPanel() -> Element {
    let site = use_site();
    let contact = site.content.contact.clone();
    let socials = site.content.socials.clone();

    rsx! {
        div { class: "contact-panel",
            div { class: "contact-info",
                p { class: "contact-pitch", "{contact.pitch}" }
                ul { class: "contact-methods",
                    li {
                        span { class: "method-label", "Email" }
                        a { href: "mailto:{contact.email}", "{contact.email}" }
                    }
                    if let Some(phone) = &contact.phone {
                        li {
                            span { class: "method-label", "Phone" }
                            a { href: "tel:{phone}", "{phone}" }
                        }
                    }
                    if let Some(location) = &contact.location {
                        li {
                            span { class: "method-label", "Location" }
                            span { "{location}" }
                        }
                    }
                }
                ul { class: "social-links",
                    for social in socials {
                        li {
                            a {
                                href: "{social.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{social.label}"
                            }
                        }
                    }
                }
            }
            ContactFormView { to: contact.email.clone() }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FormStatus {
    Idle,
    Invalid(String),
    Opened,
}

/// The form. There is no backend: a valid message opens the visitor's mail
/// client through a `mailto:` link.
#[component]
fn ContactFormView(to: String) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = ContactForm {
            name: name(),
            email: email(),
            message: message(),
        };
        match form.validate() {
            Ok(submission) => {
                tracing::info!("Opening mail client for contact message");
                browser::open_url(&submission.mailto(&to));
                status.set(FormStatus::Opened);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form rejected");
                status.set(FormStatus::Invalid(e.to_string()));
            }
        }
    };

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: submit,
            label { r#for: "contact-name", "Name" }
            input {
                id: "contact-name",
                r#type: "text",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            label { r#for: "contact-email", "Email" }
            input {
                id: "contact-email",
                r#type: "email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            label { r#for: "contact-message", "Message" }
            textarea {
                id: "contact-message",
                rows: 5,
                value: "{message}",
                oninput: move |evt| message.set(evt.value()),
            }
            {
                match status() {
                    FormStatus::Invalid(reason) => rsx! {
                        p { class: "form-error", role: "alert", "{reason}" }
                    },
                    FormStatus::Opened => rsx! {
                        p { class: "form-success",
                            "Your mail client should open with the message ready to send."
                        }
                    },
                    FormStatus::Idle => rsx! {},
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Send Message" }
        }
    }
}
