//! Common utilities for screen handlers.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::{MockCredentialStore, RegistrationRemote, SessionHolder};
use crate::config::Config;
use crate::route::Route;
use crate::storage::KeyValueStore;
use crate::Result;

/// Session holder type used by the console.
pub type ConsoleSession = SessionHolder<Box<dyn KeyValueStore>>;

/// Input read from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Plain text, without the line terminator.
    Text(String),
    /// `/login`, `/register` or `/profile`.
    Navigate(Route),
    /// `/quit` or end of input.
    Quit,
}

impl Input {
    /// Interpret a raw line.
    ///
    /// Lines starting with `/` are commands when they name a route or
    /// `/quit`; anything else is text.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("/quit") {
            return Input::Quit;
        }
        if trimmed.starts_with('/') {
            if let Ok(route) = trimmed.parse::<Route>() {
                return Input::Navigate(route);
            }
        }
        Input::Text(line.to_string())
    }
}

/// Shared context for screen handlers.
pub struct ScreenContext<R, W> {
    reader: R,
    writer: W,
    /// Application configuration.
    pub config: Arc<Config>,
    /// Mock credential store.
    pub credentials: MockCredentialStore,
    /// Current user session.
    pub session: ConsoleSession,
    /// Registration backend.
    pub remote: Box<dyn RegistrationRemote>,
}

impl<R, W> ScreenContext<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a new screen context.
    pub fn new(
        reader: R,
        writer: W,
        config: Arc<Config>,
        credentials: MockCredentialStore,
        session: ConsoleSession,
        remote: Box<dyn RegistrationRemote>,
    ) -> Self {
        Self {
            reader,
            writer,
            config,
            credentials,
            session,
            remote,
        }
    }

    /// Consume the context and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Send a line of text.
    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Send several lines.
    pub async fn send_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.send_line(line).await?;
        }
        Ok(())
    }

    /// Show a prompt and read one line of input.
    pub async fn prompt(&mut self, prompt: &str) -> Result<Input> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(Input::Quit);
        }
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        Ok(Input::parse(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("/quit"), Input::Quit);
        assert_eq!(Input::parse(" /QUIT "), Input::Quit);
        assert_eq!(Input::parse("/register"), Input::Navigate(Route::Register));
        assert_eq!(Input::parse("/profile"), Input::Navigate(Route::Profile));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(Input::parse("hello"), Input::Text("hello".to_string()));
        assert_eq!(Input::parse(""), Input::Text(String::new()));
        // Unknown commands are plain text
        assert_eq!(Input::parse("/tmp/x"), Input::Text("/tmp/x".to_string()));
        // Surrounding spaces are kept for text
        assert_eq!(Input::parse(" a "), Input::Text(" a ".to_string()));
    }
}
