//! Registration screen handler.

use tokio::io::{AsyncBufRead, AsyncWrite};

use super::common::{Input, ScreenContext};
use super::ScreenResult;
use crate::app::render;
use crate::auth::{RegistrationController, RegistrationOutcome};
use crate::error::Result;
use crate::view::AuthFormView;

/// Registration screen handler.
pub struct RegisterScreen;

impl RegisterScreen {
    /// Run the registration screen.
    ///
    /// After a successful registration the notice stays on screen for its
    /// display time before navigating to the login screen.
    pub async fn run<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<ScreenResult>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut controller =
            RegistrationController::with_notice_duration(ctx.config.registration.notice_display());

        loop {
            let view = AuthFormView::register(&controller);
            ctx.send_lines(&render::auth_form(&view)).await?;

            for field in &view.fields {
                match ctx.prompt(&render::field_prompt(field)).await? {
                    Input::Text(value) => controller.set(field.field, value),
                    Input::Navigate(route) => return Ok(ScreenResult::Navigate(route)),
                    Input::Quit => return Ok(ScreenResult::Quit),
                }
            }

            let Ok(pending) = controller.begin_submit() else {
                continue;
            };

            let busy = AuthFormView::register(&controller);
            ctx.send_line(busy.submit_label).await?;

            let result = ctx.remote.register(&pending.record).await;
            if let RegistrationOutcome::Registered { notice, then } =
                controller.complete_submit(pending, result)
            {
                ctx.send_line(&render::notice(&notice)).await?;
                tokio::time::sleep(notice.display_for).await;
                return Ok(ScreenResult::Navigate(then));
            }
        }
    }
}
