//! Login page: credential form in front of the session gate.

use leptos::prelude::*;

use crate::state::login::LoginForm;

/// Login page — exchanges credentials for a session token and reports the
/// submitted username (not a server-echoed identity) to the session gate.
///
/// Enter in either field takes the same submit path as the button. Any
/// failed exchange shows the same generic error regardless of cause.
#[component]
pub fn LoginPage(on_login: Callback<String>) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    let submit = Callback::new(move |()| {
        let started = form.try_update(LoginForm::begin_submit).unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let username = form.with_untracked(|f| f.username.clone());
            let password = form.with_untracked(|f| f.password.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username, &password).await {
                    Ok(token) => {
                        crate::util::storage::write_token(&token);
                        form.update(LoginForm::succeed);
                        on_login.run(username);
                    }
                    Err(err) => {
                        log::error!("login failed: {err}");
                        form.update(LoginForm::fail);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_login;
        }
    });

    let loading = move || form.with(|f| f.loading);

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <header class="login-page__header">
                    <h1>"Ticketing System"</h1>
                    <p>"Sign in to your account"</p>
                </header>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <div class="login-page__error">
                        <p>{move || form.with(|f| f.error.unwrap_or(""))}</p>
                    </div>
                </Show>

                <label class="login-page__label">
                    "Username"
                    <input
                        class="login-page__input"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || form.with(|f| f.username.clone())
                        prop:disabled=loading
                        on:input=move |ev| {
                            form.update(|f| f.username = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                submit.run(());
                            }
                        }
                    />
                </label>

                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || form.with(|f| f.password.clone())
                        prop:disabled=loading
                        on:input=move |ev| {
                            form.update(|f| f.password = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button
                    class="btn btn--primary login-page__submit"
                    prop:disabled=loading
                    on:click=move |_| submit.run(())
                >
                    {move || if form.with(|f| f.loading) { "Signing in..." } else { "Sign In" }}
                </button>

                <p class="login-page__hint">"Demo: admin / admin"</p>
            </div>
        </div>
    }
}
