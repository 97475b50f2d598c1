//! Profile screen handler.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::error;

use super::common::{Input, ScreenContext};
use super::ScreenResult;
use crate::app::render;
use crate::auth::{ProfileActivation, ProfileController};
use crate::error::Result;
use crate::route::Route;
use crate::view::{ProfileFormView, ProfileScreenView, ProfileView};

/// Profile screen handler.
pub struct ProfileScreen;

impl ProfileScreen {
    /// Run the profile screen.
    ///
    /// Without a current user nothing is rendered and the screen redirects
    /// to the login screen.
    pub async fn run<R, W>(ctx: &mut ScreenContext<R, W>) -> Result<ScreenResult>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut controller = match ProfileController::activate(&ctx.session) {
            ProfileActivation::Redirect(route) => return Ok(ScreenResult::Navigate(route)),
            ProfileActivation::Ready(controller) => controller,
        };

        loop {
            if let Some(route) = controller.revalidate(&ctx.session) {
                return Ok(ScreenResult::Navigate(route));
            }

            let result = match ProfileScreenView::from_controller(&controller) {
                None => Some(ScreenResult::Navigate(Route::Login)),
                Some(ProfileScreenView::View(view)) => {
                    Self::view_mode(ctx, &mut controller, &view).await?
                }
                Some(ProfileScreenView::Form(form)) => {
                    Self::edit_mode(ctx, &mut controller, &form).await?
                }
            };

            if let Some(result) = result {
                return Ok(result);
            }
        }
    }

    /// Show the profile and handle one action.
    async fn view_mode<R, W>(
        ctx: &mut ScreenContext<R, W>,
        controller: &mut ProfileController,
        view: &ProfileView,
    ) -> Result<Option<ScreenResult>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_lines(&render::profile(view)).await?;

        let command = match ctx.prompt("> ").await? {
            Input::Text(command) => command,
            Input::Navigate(route) => return Ok(Some(ScreenResult::Navigate(route))),
            Input::Quit => return Ok(Some(ScreenResult::Quit)),
        };

        match command.trim().to_uppercase().as_str() {
            "E" => controller.edit(),
            "L" => match controller.logout(&mut ctx.session) {
                Ok(route) => return Ok(Some(ScreenResult::Navigate(route))),
                Err(e) => {
                    error!(error = %e, "Failed to clear session");
                    ctx.send_line("! Could not log out. Please try again.")
                        .await?;
                }
            },
            "Q" => return Ok(Some(ScreenResult::Quit)),
            _ => {}
        }

        Ok(None)
    }

    /// Collect edits and save or cancel them.
    async fn edit_mode<R, W>(
        ctx: &mut ScreenContext<R, W>,
        controller: &mut ProfileController,
        form: &ProfileFormView,
    ) -> Result<Option<ScreenResult>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        ctx.send_lines(&render::profile_form_header()).await?;

        for field in &form.fields {
            match ctx.prompt(&render::edit_prompt(field)).await? {
                Input::Text(value) if value.is_empty() => {}
                Input::Text(value) => controller.set(field.field, value),
                Input::Navigate(route) => {
                    controller.cancel();
                    return Ok(Some(ScreenResult::Navigate(route)));
                }
                Input::Quit => return Ok(Some(ScreenResult::Quit)),
            }
        }

        loop {
            let choice = match ctx.prompt("[S] Save  [C] Cancel: ").await? {
                Input::Text(choice) => choice,
                Input::Navigate(route) => {
                    controller.cancel();
                    return Ok(Some(ScreenResult::Navigate(route)));
                }
                Input::Quit => return Ok(Some(ScreenResult::Quit)),
            };

            match choice.trim().to_uppercase().as_str() {
                "S" => {
                    if let Err(e) = controller.save(&mut ctx.session) {
                        error!(error = %e, "Failed to save profile");
                        ctx.send_line("! Could not save the profile. Please try again.")
                            .await?;
                    }
                    return Ok(None);
                }
                "C" => {
                    controller.cancel();
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}
