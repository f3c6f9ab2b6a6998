use super::*;

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

impl AppState {
    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_press(key, tx).await?;
        }
        Ok(())
    }

    pub(crate) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        if matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Enter => {
                self.submit_search_input(tx);
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(ch) if is_search_char(key, ch) => self.search_input.push(ch),
            _ => {}
        }
        Ok(())
    }
}

fn is_search_char(key: KeyEvent, ch: char) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        && is_city_char(ch)
}
