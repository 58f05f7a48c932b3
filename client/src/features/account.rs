//! Account flows: sign-in, sign-up, password recovery, token verification
//! and the profile view.
//!
//! Forms post straight to the backend auth endpoints; credential handling
//! and token checks happen there. Reset and verification forms carry the
//! token taken from the page's query string in a hidden field.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::state::auth::AuthState;

/// Which account screen to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountFlow {
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    VerifyToken,
}

impl AccountFlow {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Create an account",
            Self::ForgotPassword => "Forgot your password?",
            Self::ResetPassword => "Choose a new password",
            Self::VerifyToken => "Verify your email",
        }
    }

    /// Backend endpoint the form submits to.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Self::Login => "/api/auth/login",
            Self::Signup => "/api/auth/signup",
            Self::ForgotPassword => "/api/auth/forgot-password",
            Self::ResetPassword => "/api/auth/reset-password",
            Self::VerifyToken => "/api/auth/verify",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Sign up",
            Self::ForgotPassword => "Send reset link",
            Self::ResetPassword => "Update password",
            Self::VerifyToken => "Verify",
        }
    }

    /// Whether the flow needs a token from the query string.
    #[must_use]
    pub fn needs_token(self) -> bool {
        matches!(self, Self::ResetPassword | Self::VerifyToken)
    }

    fn fields(self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            Self::Login => &[("email", "email", "Email"), ("password", "password", "Password")],
            Self::Signup => &[("name", "text", "Display name"), ("email", "email", "Email"), ("password", "password", "Password")],
            Self::ForgotPassword => &[("email", "email", "Email")],
            Self::ResetPassword => &[("password", "password", "New password")],
            Self::VerifyToken => &[],
        }
    }

    fn footer_link(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Login => Some(("/signup", "Need an account? Sign up")),
            Self::Signup => Some(("/login", "Already registered? Log in")),
            Self::ForgotPassword | Self::ResetPassword => Some(("/login", "Back to log in")),
            Self::VerifyToken => None,
        }
    }
}

/// Form card for one account flow.
#[component]
pub fn AccountForm(flow: AccountFlow, token: Option<String>) -> impl IntoView {
    view! {
        <div class="account-card">
            <h1>{flow.heading()}</h1>
            <form class="account-form" method="post" action=flow.action()>
                {flow
                    .fields()
                    .iter()
                    .map(|(name, kind, label)| {
                        view! {
                            <label class="account-form__field">
                                <span>{*label}</span>
                                <input class="account-input" name=*name type=*kind required=true/>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
                {token.map(|t| view! { <input type="hidden" name="token" value=t/> })}
                <button class="btn btn--primary" type="submit">{flow.submit_label()}</button>
            </form>
            {(flow == AccountFlow::Login)
                .then(|| view! { <a class="account-card__link" href="/forgot-password">"Forgot password?"</a> })}
            {flow.footer_link().map(|(href, text)| view! { <a class="account-card__link" href=href>{text}</a> })}
        </div>
    }
}

/// The signed-in user's profile.
#[component]
pub fn ProfileCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let state = auth.get();
        match state.user {
            Some(user) => view! {
                <div class="account-card profile-card">
                    {user.avatar_url.map(|src| view! { <img class="profile-card__avatar" src=src alt=""/> })}
                    <h1>{user.name}</h1>
                    <p class="profile-card__role">{format!("{:?}", user.role)}</p>
                </div>
            }
            .into_any(),
            None if state.loading => view! { <p class="account-card__loading">"Loading profile..."</p> }.into_any(),
            None => view! { <EmptyState text="Log in to see your profile."/> }.into_any(),
        }
    }
}
