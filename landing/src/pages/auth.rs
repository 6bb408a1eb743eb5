// Login, registration and password recovery
use crate::forms::{SchemaForm, use_form};
use leptos::prelude::*;
use leptos_router::components::A;
use travelworld_forms::catalog;

/// Branding panel on the left, form box on the right.
#[component]
fn AuthLayout(
    title: &'static str,
    subtitle: &'static str,
    #[prop(default = "Discover destinations. Create memories. Travel smart.")] tagline: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="auth-left">
                <div class="brand-content">
                    <h1>"TravelWorld ✈️"</h1>
                    <p>{tagline}</p>
                </div>
            </div>
            <div class="auth-right">
                <div class="form-box">
                    <h2>{title}</h2>
                    <p class="subtitle">{subtitle}</p>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = use_form(catalog::login_form());
    view! {
        <AuthLayout title="Welcome Back" subtitle="Login to continue your journey">
            <SchemaForm form=form>
                <div class="options">
                    <A href="/forgot-password" attr:class="forgot">"Forgot Password?"</A>
                </div>
            </SchemaForm>
            <div class="bottom-text">
                "Don’t have an account? "
                <A href="/signup">"Sign Up"</A>
                <br />
                <A href="/home" attr:class="back-home">"← Back to Homepage"</A>
            </div>
        </AuthLayout>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = use_form(catalog::register_form());
    view! {
        <AuthLayout title="Create Account" subtitle="Register to start your journey">
            <SchemaForm form=form />
            <div class="bottom-text">
                "Already have an account? "
                <A href="/login">"Login"</A>
                <br />
                <A href="/home" attr:class="back-home">"← Back to Homepage"</A>
            </div>
        </AuthLayout>
    }
}

const RECOVERY_TAGLINE: &str = "Reset your password and continue your journey with us.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let form = use_form(catalog::forgot_password_form());
    view! {
        <AuthLayout
            title="Forgot Password?"
            subtitle="Enter your email to receive a reset link"
            tagline=RECOVERY_TAGLINE
        >
            <SchemaForm form=form />
            <div class="bottom-text">
                "Remembered it? "
                <A href="/login">"Login"</A>
            </div>
        </AuthLayout>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let form = use_form(catalog::reset_password_form());
    view! {
        <AuthLayout
            title="Reset Password"
            subtitle="Choose a new password for your account"
            tagline=RECOVERY_TAGLINE
        >
            <SchemaForm form=form />
            <div class="bottom-text">
                "Back to "
                <A href="/login">"Login"</A>
            </div>
        </AuthLayout>
    }
}
