use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::glass_card::GlassCard;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::contact::ContactForm;

#[derive(Clone, Copy)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Topic,
    Message,
}

pub struct SetField(pub ContactField, pub String);

impl Reducible for ContactForm {
    type Action = SetField;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let SetField(field, value) = action;
        let mut next = (*self).clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Phone => next.phone = value,
            ContactField::Topic => next.topic = value,
            ContactField::Message => next.message = value,
        }
        Rc::new(next)
    }
}

fn on_field_input(form: &UseReducerHandle<ContactForm>, field: ContactField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            area.value()
        } else {
            return;
        };
        form.dispatch(SetField(field, value));
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let sent = use_state(|| false);
    // Dropping the handle cancels a pending reset when the page unmounts.
    let reset_sent = use_mut_ref(|| None::<Timeout>);

    let on_topic = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(SetField(ContactField::Topic, select.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        let reset_sent = reset_sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                debug!("contact form not submitted: {}", err);
                return;
            }

            let draft = form.draft(config::PRACTICE_EMAIL);
            let Some(window) = web_sys::window() else {
                warn!("no window available to open the mail client");
                return;
            };
            if let Err(err) = window.location().set_href(&draft.mailto_url()) {
                warn!("could not hand off mail draft: {:?}", err);
                return;
            }
            info!("mail draft handed off: {}", draft.subject);

            sent.set(true);
            let sent = sent.clone();
            *reset_sent.borrow_mut() = Some(Timeout::new(config::SENT_INDICATOR_MS, move || {
                sent.set(false);
            }));
        })
    };

    let can_submit = form.is_valid();

    html! {
        <div class="contact-page">
            <SectionHeading
                eyebrow="Contact"
                title="Book a visit or ask a question"
                subtitle="Send us a note and we'll reply within one working day."
            />
            <div class="contact-grid">
                <GlassCard class="contact-details">
                    <h3>{config::PRACTICE_NAME}</h3>
                    <p>{config::PRACTICE_ADDRESS}</p>
                    <p>
                        <a href={format!("tel:{}", config::PRACTICE_PHONE.replace(' ', ""))}>{config::PRACTICE_PHONE}</a>
                    </p>
                    <p>
                        <a href={format!("mailto:{}", config::PRACTICE_EMAIL)}>{config::PRACTICE_EMAIL}</a>
                    </p>
                    <h4>{"Opening hours"}</h4>
                    <ul class="opening-hours">
                        { for config::OPENING_HOURS.iter().map(|(days, hours)| html! {
                            <li><span>{*days}</span><span>{*hours}</span></li>
                        }) }
                    </ul>
                </GlassCard>

                <GlassCard class="contact-form-card">
                    <form class="contact-form" {onsubmit}>
                        <label>
                            {"Name"}
                            <input type="text" value={form.name.clone()} oninput={on_field_input(&form, ContactField::Name)} />
                        </label>
                        <label>
                            {"Email"}
                            <input type="email" value={form.email.clone()} oninput={on_field_input(&form, ContactField::Email)} />
                        </label>
                        <label>
                            {"Phone (optional)"}
                            <input type="tel" value={form.phone.clone()} oninput={on_field_input(&form, ContactField::Phone)} />
                        </label>
                        <label>
                            {"Topic (optional)"}
                            <select onchange={on_topic}>
                                { for config::CONTACT_TOPICS.iter().map(|topic| html! {
                                    <option value={*topic} selected={*topic == form.topic.as_str()}>
                                        { if topic.is_empty() { "Choose a topic" } else { *topic } }
                                    </option>
                                }) }
                            </select>
                        </label>
                        <label>
                            {"Message"}
                            <textarea rows="6" value={form.message.clone()} oninput={on_field_input(&form, ContactField::Message)} />
                        </label>
                        <div class="contact-actions">
                            <Button button_type="submit" disabled={!can_submit}>{"Send message"}</Button>
                            if *sent {
                                <span class="sent-indicator">{"✓ Sent"}</span>
                            }
                        </div>
                    </form>
                </GlassCard>
            </div>
            <style>
                {r#"
                .contact-page {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.6fr;
                    gap: 1.5rem;
                    align-items: start;
                }
                .contact-details h3 {
                    color: #0f4c5c;
                    margin-top: 0;
                }
                .contact-details p,
                .contact-details a {
                    color: #35535c;
                }
                .opening-hours {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .opening-hours li {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.4rem 0;
                    border-bottom: 1px solid rgba(15, 76, 92, 0.08);
                    font-size: 0.95rem;
                    color: #4a6670;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.1rem;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-size: 0.9rem;
                    color: #0f4c5c;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(15, 76, 92, 0.2);
                    background: rgba(255, 255, 255, 0.75);
                    font-size: 1rem;
                    font-family: inherit;
                }
                .contact-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .sent-indicator {
                    color: #1d7f75;
                    font-weight: 600;
                }
                @media (max-width: 768px) {
                    .contact-page {
                        padding: 6rem 1rem 3rem;
                    }
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
