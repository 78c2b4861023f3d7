//! アプリのインストールボタン

/// インストール済みフラグを保存するローカルストレージのキー
pub const INSTALLED_KEY: &str = "appInstalled";

pub const ALREADY_INSTALLED_NOTICE: &str = "You already have the app installed.";
pub const UNAVAILABLE_NOTICE: &str =
    "Install isn’t available right now. Try “Add to Home Screen” from your browser menu.";

/// ボタン押下時の動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    AlreadyInstalled,
    /// ブラウザがインストールプロンプトを提供していない
    Unavailable,
    Prompt,
}

impl InstallAction {
    /// プロンプトの代わりに表示する案内
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            InstallAction::AlreadyInstalled => Some(ALREADY_INSTALLED_NOTICE),
            InstallAction::Unavailable => Some(UNAVAILABLE_NOTICE),
            InstallAction::Prompt => None,
        }
    }
}

/// スタンドアロン表示中か、以前インストールを記録していればプロンプトは出さない
pub fn install_action(standalone: bool, remembered: bool, has_prompt: bool) -> InstallAction {
    if standalone || remembered {
        InstallAction::AlreadyInstalled
    } else if has_prompt {
        InstallAction::Prompt
    } else {
        InstallAction::Unavailable
    }
}
