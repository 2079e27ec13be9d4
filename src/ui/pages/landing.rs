//! Landing page component
//!
//! Static welcome content with one card each for signing in and registering.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::Route;
use crate::ui::icon::{Icon, icons};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Web Server"/>
        <Meta name="description" content="A simple web server"/>

        <div class="min-h-screen flex flex-col items-center justify-center bg-theme-primary">
            <main class="flex flex-col items-center justify-center w-full flex-1 px-20 text-center">
                <h1 class="text-6xl font-bold text-theme-primary">
                    "Welcome to "
                    <span class="text-accent-primary">"Web Server"</span>
                </h1>

                <div class="flex flex-wrap items-center justify-around max-w-4xl mt-6 sm:w-full">
                    <NavCard
                        route=Route::Login
                        title="Login"
                        description="Already have an account? Sign in here."
                    />
                    <NavCard
                        route=Route::Register
                        title="Register"
                        description="New to our platform? Create an account here."
                    />
                </div>
            </main>
        </div>
    }
}

#[component]
fn NavCard(route: Route, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <A
            href=route.to_string()
            attr:class="p-6 mt-6 text-left border border-theme w-96 rounded-xl
                        hover:text-accent-primary focus:text-accent-primary transition-colors"
        >
            <h3 class="flex items-center gap-2 text-2xl font-bold">
                {title}
                <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
            </h3>
            <p class="mt-4 text-xl text-theme-secondary">{description}</p>
        </A>
    }
}
