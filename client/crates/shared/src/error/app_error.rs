//! Application Error - Unified error type for the client
//!
//! [`AppError`] carries a [`ErrorKind`], a diagnostic message, an optional
//! hint for whoever configures or drives the client, and the underlying
//! error when there is one.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// クライアント統一エラー型
///
/// 設定読み込み・ストア・タイマーなど、ガード本体の外側で起きた失敗を
/// 呼び出し元へ伝えるための型です。ゲート内部の失敗はログに落とされ、
/// ここまで上がってきません。
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::invalid_input("EXIT_GUARD_WINDOW_MS must be greater than zero")
///     .with_action("Set a duration in milliseconds");
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// assert_eq!(err.code(), "INVALID_INPUT");
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    /// 利用者が取るべき対処（設定値の修正など）
    action: Option<Cow<'static, str>>,
    source: Option<BoxedSource>,
}

/// `Result<T, AppError>` の省略形
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::AppResult;
///
/// fn window_ms(raw: &str) -> AppResult<u64> {
///     Ok(raw.trim().parse::<u64>()?)
/// }
/// assert!(window_ms("2000").is_ok());
/// assert!(window_ms("soon").is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 種別とメッセージからエラーを作成
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// 設定値・コマンド入力の不正
    pub fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// 永続化データを解析できない
    pub fn corrupt_data(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::CorruptData, message)
    }

    /// ランタイムやストアが使えない
    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unavailable, message)
    }

    /// 上記に当てはまらない失敗
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// 対処方法を付与
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを付与
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn read_store() -> AppResult<String> {
    ///     std::fs::read_to_string("shell-store.json")
    ///         .map_err(|e| AppError::unavailable("Failed to read store").with_source(e))
    /// }
    /// ```
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// ログ用の安定したコード
    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// 時間をおけば回復し得るか
    #[inline]
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        match &self.action {
            Some(action) => write!(f, " (Action: {action})"),
            None => Ok(()),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
