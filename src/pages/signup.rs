//! Three-step signup wizard: parent, child, review.
//!
//! The terminal submit runs register, login, token persistence, a
//! best-effort language update, then child creation, and lands on the
//! dashboard. Any failing step stops the chain and shows its message.

use leptos::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::net::types::Region;
use crate::state::session::Session;
use crate::state::signup::{GENDERS, SignupStep, SignupWizard};

/// [`crate::state::signup::SignupBackend`] over the live API and session.
#[cfg(feature = "hydrate")]
struct LiveSignup {
    api: crate::app::Api,
    session: RwSignal<Session>,
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl crate::state::signup::SignupBackend for LiveSignup {
    async fn register(
        &self,
        payload: &crate::net::types::RegisterPayload,
    ) -> Result<crate::net::types::RegisterResponse, crate::net::error::ApiError> {
        self.api.anonymous().register(payload).await
    }

    async fn login(
        &self,
        payload: &crate::net::types::LoginPayload,
    ) -> Result<crate::net::types::LoginResponse, crate::net::error::ApiError> {
        self.api.anonymous().login(payload).await
    }

    fn persist_token(&self, login: &crate::net::types::LoginResponse) {
        self.session.update(|s| s.sign_in(&crate::state::session::BrowserStore, login));
    }

    async fn set_preferred_language(&self, locale: crate::i18n::Locale) -> Result<(), crate::net::error::ApiError> {
        self.api.client().update_preferred_language(locale).await.map(|_| ())
    }

    async fn create_child(
        &self,
        payload: &crate::net::types::CreateChildPayload,
    ) -> Result<crate::net::types::Child, crate::net::error::ApiError> {
        self.api.client().create_child(payload).await
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = crate::app::use_api();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let wizard = RwSignal::new(SignupWizard::default());
    let regions = LocalResource::new(move || async move {
        api.anonymous().fetch_regions().await.unwrap_or_else(|e| {
            log::warn!("region list unavailable: {e}");
            Vec::<Region>::new()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let step = wizard.with_untracked(|w| w.step);
        if step != SignupStep::Review {
            wizard.update(|w| {
                w.next();
            });
            return;
        }
        let locale = session.with_untracked(|s| s.locale);
        let Some(request) = wizard.try_update(|w| w.begin_submit(locale)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let backend = LiveSignup { api, session };
                let result = crate::state::signup::submit_signup(&backend, &request).await;
                wizard.update(|w| w.finish_submit(&result));
                if result.is_ok() {
                    navigate("/dashboard", crate::util::auth::replace());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            wizard.update(|w| w.loading = false);
        }
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <a href="/" class="brand">"VacciTrack"</a>
                <LanguageSwitcher/>
            </header>
            <form class="auth-card signup" on:submit=on_submit>
                <h1>"Create your account"</h1>
                <ol class="signup__steps">
                    {[SignupStep::ParentInfo, SignupStep::ChildInfo, SignupStep::Review]
                        .into_iter()
                        .map(|step| {
                            view! {
                                <li
                                    class="signup__step"
                                    class:signup__step--active=move || wizard.with(|w| w.step == step)
                                    class:signup__step--done=move || wizard.with(|w| w.step.index() > step.index())
                                >
                                    {format!("{}. {}", step.index() + 1, step.title())}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                {move || match wizard.with(|w| w.step) {
                    SignupStep::ParentInfo => view! { <ParentStep wizard=wizard regions=regions/> }.into_any(),
                    SignupStep::ChildInfo => view! { <ChildStep wizard=wizard/> }.into_any(),
                    SignupStep::Review => view! { <ReviewStep wizard=wizard regions=regions/> }.into_any(),
                }}

                <Show when=move || wizard.with(|w| w.error.is_some())>
                    <p class="auth-card__error">{move || wizard.with(|w| w.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class="signup__nav">
                    <Show when=move || wizard.with(|w| w.step != SignupStep::ParentInfo)>
                        <button
                            class="btn"
                            type="button"
                            disabled=move || wizard.with(|w| w.loading)
                            on:click=move |_| {
                                wizard.update(|w| {
                                    w.back();
                                });
                            }
                        >
                            "Back"
                        </button>
                    </Show>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || wizard.with(|w| w.loading || !w.can_proceed())
                    >
                        {move || {
                            wizard
                                .with(|w| match (w.step, w.loading) {
                                    (SignupStep::Review, true) => "Creating account...",
                                    (SignupStep::Review, false) => "Create account",
                                    _ => "Next",
                                })
                        }}
                    </button>
                </div>
                <p class="auth-card__alt">
                    "Already registered? " <a href="/signin">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}

#[component]
fn ParentStep(wizard: RwSignal<SignupWizard>, regions: LocalResource<Vec<Region>>) -> impl IntoView {
    view! {
        <fieldset class="signup__fields">
            <label class="auth-card__label">
                "Full name"
                <input
                    class="auth-card__input"
                    type="text"
                    autocomplete="name"
                    prop:value=move || wizard.with(|w| w.parent.full_name.clone())
                    on:input=move |ev| wizard.update(|w| w.parent.full_name = event_target_value(&ev))
                />
            </label>
            <label class="auth-card__label">
                "Email"
                <input
                    class="auth-card__input"
                    type="email"
                    autocomplete="email"
                    prop:value=move || wizard.with(|w| w.parent.email.clone())
                    on:input=move |ev| wizard.update(|w| w.parent.email = event_target_value(&ev))
                />
            </label>
            <label class="auth-card__label">
                "Phone"
                <input
                    class="auth-card__input"
                    type="tel"
                    autocomplete="tel"
                    prop:value=move || wizard.with(|w| w.parent.phone.clone())
                    on:input=move |ev| wizard.update(|w| w.parent.phone = event_target_value(&ev))
                />
            </label>
            <label class="auth-card__label">
                "Region"
                <select
                    class="auth-card__input"
                    prop:value=move || wizard.with(|w| w.parent.region_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let region_id = event_target_value(&ev).parse::<i64>().ok();
                        wizard.update(|w| w.parent.region_id = region_id);
                    }
                >
                    <option value="">"Select your region"</option>
                    {move || {
                        regions
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|r| view! { <option value=r.id.to_string()>{r.name}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            <label class="auth-card__label">
                "Password"
                <input
                    class="auth-card__input"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || wizard.with(|w| w.parent.password.clone())
                    on:input=move |ev| wizard.update(|w| w.parent.password = event_target_value(&ev))
                />
            </label>
            <label class="auth-card__label">
                "Confirm password"
                <input
                    class="auth-card__input"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || wizard.with(|w| w.parent.confirm_password.clone())
                    on:input=move |ev| wizard.update(|w| w.parent.confirm_password = event_target_value(&ev))
                />
            </label>
            <Show when=move || {
                wizard.with(|w| !w.parent.confirm_password.is_empty() && w.parent.password != w.parent.confirm_password)
            }>
                <p class="auth-card__hint">"Passwords do not match."</p>
            </Show>
        </fieldset>
    }
}

#[component]
fn ChildStep(wizard: RwSignal<SignupWizard>) -> impl IntoView {
    view! {
        <fieldset class="signup__fields">
            <label class="auth-card__label">
                "First name"
                <input
                    class="auth-card__input"
                    type="text"
                    prop:value=move || wizard.with(|w| w.child.first_name.clone())
                    on:input=move |ev| wizard.update(|w| w.child.first_name = event_target_value(&ev))
                />
            </label>
            <label class="auth-card__label">
                "Last name"
                <input
                    class="auth-card__input"
                    type="text"
                    prop:value=move || wizard.with(|w| w.child.last_name.clone())
                    on:input=move |ev| wizard.update(|w| w.child.last_name = event_target_value(&ev))
                />
            </label>
            <label class="auth-card__label">
                "Date of birth"
                <input
                    class="auth-card__input"
                    type="date"
                    prop:value=move || wizard.with(|w| w.child.date_of_birth.clone())
                    on:input=move |ev| wizard.update(|w| w.child.date_of_birth = event_target_value(&ev))
                />
            </label>
            <div class="auth-card__label" role="radiogroup">
                "Gender"
                {GENDERS
                    .iter()
                    .map(|gender| {
                        let gender = *gender;
                        view! {
                            <label class="signup__radio">
                                <input
                                    type="radio"
                                    name="gender"
                                    value=gender
                                    prop:checked=move || wizard.with(|w| w.child.gender == gender)
                                    on:change=move |_| wizard.update(|w| w.child.gender = gender.to_owned())
                                />
                                {gender}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

#[component]
fn ReviewStep(wizard: RwSignal<SignupWizard>, regions: LocalResource<Vec<Region>>) -> impl IntoView {
    let region_name = move || {
        let id = wizard.with(|w| w.parent.region_id);
        regions.get().unwrap_or_default().into_iter().find(|r| Some(r.id) == id).map(|r| r.name).unwrap_or_default()
    };

    view! {
        <div class="signup__review">
            <h2>"Parent"</h2>
            <dl>
                <dt>"Name"</dt>
                <dd>{move || wizard.with(|w| w.parent.full_name.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{move || wizard.with(|w| w.parent.email.clone())}</dd>
                <dt>"Phone"</dt>
                <dd>{move || wizard.with(|w| w.parent.phone.clone())}</dd>
                <dt>"Region"</dt>
                <dd>{region_name}</dd>
            </dl>
            <h2>"Child"</h2>
            <dl>
                <dt>"Name"</dt>
                <dd>{move || wizard.with(|w| w.child.full_name())}</dd>
                <dt>"Date of birth"</dt>
                <dd>{move || wizard.with(|w| crate::util::dates::format_raw(&w.child.date_of_birth))}</dd>
                <dt>"Gender"</dt>
                <dd>{move || wizard.with(|w| w.child.gender.clone())}</dd>
            </dl>
            <label class="signup__agree">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.agreed)
                    on:change=move |ev| wizard.update(|w| w.agreed = event_target_checked(&ev))
                />
                "I agree to the terms of use and to receive vaccination reminders."
            </label>
        </div>
    }
}
