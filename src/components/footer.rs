//! Contact footer
//!
//! Left column: heading, email card and social links.
//! Right column: the contact form, posted asynchronously to Formspree.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::content::{Icon, BUILT_WITH, CONTACT_HEADING, PROFILE, SECTION_CONTACT};
use portfolio_core::{submit_contact, ContactSession, SubmissionStatus};

use crate::components::{LucideIcon, SectionHeading};
use crate::context::use_transport;

/// Class of the inline notice under the form.
fn notice_class(status: &SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Succeeded => "form-notice form-notice--success",
        SubmissionStatus::Failed(_) => "form-notice form-notice--error",
        SubmissionStatus::Idle | SubmissionStatus::Submitting => "form-notice",
    }
}

fn submit_label(status: &SubmissionStatus) -> &'static str {
    if status.is_submitting() {
        "Sending..."
    } else {
        "Send Message"
    }
}

fn copyright_line(year: i32) -> String {
    format!("© {} {}.", year, PROFILE.owner)
}

#[component]
pub fn Footer() -> Element {
    let transport = use_transport();
    let mut session = use_signal(ContactSession::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(snapshot) = session.write().begin() else {
            return;
        };
        let transport = transport.get();

        tracing::info!("Submitting contact form");
        spawn(async move {
            let outcome = submit_contact(transport.as_ref(), &snapshot).await;
            match &outcome {
                Ok(()) => tracing::info!("Contact form delivered"),
                Err(e) => tracing::warn!(error = %e, "Contact form submission failed"),
            }
            session.write().finish(outcome);
        });
    };

    let (form, status) = {
        let current = session.read();
        (current.form.clone(), current.status.clone())
    };
    let submitting = status.is_submitting();
    let year = chrono::Local::now().year();

    rsx! {
        footer { id: SECTION_CONTACT, class: "footer",
            div { class: "container",
                div { class: "footer-layout",
                    // Contact details
                    div { class: "footer-info",
                        SectionHeading { heading: CONTACT_HEADING }

                        a { class: "email-card card reveal", href: PROFILE.mailto(),
                            div { class: "email-card-icon",
                                LucideIcon { icon: Icon::Mail, size: 22 }
                            }
                            div {
                                span { class: "email-card-label", "Email Me" }
                                span { class: "email-card-address", "{PROFILE.email}" }
                            }
                        }

                        div { class: "social-links reveal",
                            a {
                                class: "social-link",
                                href: PROFILE.linkedin,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "LinkedIn",
                                LucideIcon { icon: Icon::Linkedin, size: 20 }
                            }
                            a {
                                class: "social-link",
                                href: PROFILE.github,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "GitHub",
                                LucideIcon { icon: Icon::Github, size: 20 }
                            }
                            a { class: "btn btn-ghost", href: PROFILE.resume, download: "",
                                LucideIcon { icon: Icon::Download, size: 16 }
                                "Download CV"
                            }
                        }
                    }

                    // Contact form
                    form { class: "contact-form card reveal", onsubmit,
                        div { class: "form-row",
                            div { class: "form-field",
                                label { r#for: "contact-name", "Name" }
                                input {
                                    id: "contact-name",
                                    name: "name",
                                    r#type: "text",
                                    placeholder: "John Doe",
                                    required: true,
                                    value: "{form.name}",
                                    oninput: move |e| session.write().set_name(e.value()),
                                }
                            }
                            div { class: "form-field",
                                label { r#for: "contact-email", "Email" }
                                input {
                                    id: "contact-email",
                                    name: "email",
                                    r#type: "email",
                                    placeholder: "john@example.com",
                                    required: true,
                                    value: "{form.email}",
                                    oninput: move |e| session.write().set_email(e.value()),
                                }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-message", "Message" }
                            textarea {
                                id: "contact-message",
                                name: "message",
                                placeholder: "Tell me about your project...",
                                rows: 5,
                                required: true,
                                value: "{form.message}",
                                oninput: move |e| session.write().set_message(e.value()),
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: submitting,
                            {submit_label(&status)}
                            if !submitting {
                                LucideIcon { icon: Icon::Send, size: 16 }
                            }
                        }

                        if let Some(notice) = status.notice() {
                            p { class: notice_class(&status), "role": "status", "{notice}" }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { {copyright_line(year)} }
                    p { class: "footer-built-with", "{BUILT_WITH}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_class_follows_status() {
        assert_eq!(notice_class(&SubmissionStatus::Succeeded), "form-notice form-notice--success");
        assert_eq!(
            notice_class(&SubmissionStatus::Failed("nope".to_string())),
            "form-notice form-notice--error"
        );
        assert_eq!(notice_class(&SubmissionStatus::Idle), "form-notice");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 2026 Kinisha Gupta.");
    }

    #[test]
    fn test_submit_label_while_sending() {
        assert_eq!(submit_label(&SubmissionStatus::Submitting), "Sending...");
        assert_eq!(submit_label(&SubmissionStatus::Idle), "Send Message");
        assert_eq!(submit_label(&SubmissionStatus::Failed(String::new())), "Send Message");
    }
}
