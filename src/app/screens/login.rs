//! Login screen handler.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::error;

use super::common::{Input, ScreenContext};
use super::ScreenResult;
use crate::app::render;
use crate::auth::{LoginController, LoginOutcome};
use crate::error::Result;
use crate::view::AuthFormView;

/// Login screen handler.
pub struct LoginScreen;

impl LoginScreen {
    /// Run the login screen until the user logs in or leaves.
    pub async fn run<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<ScreenResult>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut controller = LoginController::new();
        let hint = if ctx.config.credentials.show_hint {
            ctx.credentials.hint()
        } else {
            None
        };

        loop {
            let view = AuthFormView::login(&controller, hint.clone());
            ctx.send_lines(&render::auth_form(&view)).await?;

            for field in &view.fields {
                match ctx.prompt(&render::field_prompt(field)).await? {
                    Input::Text(value) => controller.set(field.field, value),
                    Input::Navigate(route) => return Ok(ScreenResult::Navigate(route)),
                    Input::Quit => return Ok(ScreenResult::Quit),
                }
            }

            match controller.submit(&ctx.credentials, &mut ctx.session) {
                Ok(LoginOutcome::Navigate(route)) => return Ok(ScreenResult::Navigate(route)),
                Ok(LoginOutcome::Rejected) => {}
                Err(e) => {
                    error!(error = %e, "Failed to store session");
                    ctx.send_line("! Could not save the session. Please try again.")
                        .await?;
                }
            }
        }
    }
}
