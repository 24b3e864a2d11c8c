/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - API key の照合先 (store など) を持つ場合はここに追加する
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
