use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::ui_model::APP_TITLE;

#[component]
pub(super) fn LoginPage(
    email: Signal<String>,
    password: Signal<String>,
    background_url: String,
    logo_url: String,
    on_email: Callback<String>,
    on_password: Callback<String>,
    on_login: Callback<()>,
    on_recover: Callback<()>,
    on_register: Callback<()>,
) -> impl IntoView {
    let background = format!("background-image: url({background_url});");

    view! {
        <div class="login-page">
            <div class="login-backdrop" style=background></div>
            <div class="login-tint"></div>

            <div class="card login-card">
                <div class="login-brand">
                    <img src=logo_url alt="DocFlow Logo" class="login-logo" />
                    <h1>{APP_TITLE}</h1>
                </div>

                <form
                    class="login-form"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        on_login.run(());
                    }
                >
                    <label for="email">"Логин"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="email@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| on_email.run(event_target_value(&ev))
                    />

                    <label for="password">"Пароль"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| on_password.run(event_target_value(&ev))
                    />

                    <button type="button" class="link-btn" on:click=move |_| on_recover.run(())>
                        "Восстановление пароля"
                    </button>

                    <button type="submit" class="btn primary wide">
                        "Войти"
                    </button>

                    <button type="button" class="btn outline wide" on:click=move |_| on_register.run(())>
                        "Создать аккаунт"
                    </button>
                </form>
            </div>
        </div>
    }
}
