//! Login page component
//!
//! A standalone page for user login, redirects to the landing page on success.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::{
    ApiConfig, HttpAuthApi, LocalStorageTokenStore, LoginForm, Route, submit_login,
};
use crate::ui::common::{FormField, SubmitButton};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let api_config = use_context::<ApiConfig>().unwrap_or_default();
    let navigate = use_navigate();

    // Form state
    let form = RwSignal::new(LoginForm::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        error.set(None);
        loading.set(true);

        let api = HttpAuthApi::new(api_config.clone());
        let current = form.get_untracked();
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = submit_login(&api, &LocalStorageTokenStore, &current).await;
            loading.set(false);
            match result {
                Ok(route) => navigate(&route.to_string(), Default::default()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <Title text="Login - Web Server"/>

        <div class="min-h-screen flex items-center justify-center bg-theme-secondary py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-theme-primary">
                    "Sign in to your account"
                </h2>

                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="rounded-md shadow-sm space-y-4">
                        <FormField
                            label="Username"
                            name="username"
                            autocomplete="username"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.username.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.username = v))
                            error=error
                        />
                        <FormField
                            label="Password"
                            name="password"
                            input_type="password"
                            autocomplete="current-password"
                            required=true
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        />
                    </div>

                    <SubmitButton loading=loading text="Sign in" loading_text="Signing in..."/>

                    <div class="text-sm text-center">
                        <A
                            href=Route::Register.to_string()
                            attr:class="font-medium text-accent-primary hover:text-accent-primary-hover"
                        >
                            "Don't have an account? Register now"
                        </A>
                    </div>
                </form>
            </div>
        </div>
    }
}
