//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every client component.

use serde::Serialize;

/// エラー種別の列挙体
///
/// クライアント内部で発生するエラーの分類を定義します。
/// 各バリアントは安定したコード文字列（ログ・診断用）を持ちます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::CorruptData;
/// assert_eq!(kind.code(), "CORRUPT_DATA");
/// assert_eq!(kind.as_str(), "Corrupt Data");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値が不正（設定値など）
    InvalidInput,
    /// 対象が存在しない
    NotFound,
    /// アクセス権限なし
    PermissionDenied,
    /// 永続化データが壊れている／解析できない
    CorruptData,
    /// タイムアウト
    Timeout,
    /// 依存先（ストレージ・ランタイム）が利用不可
    Unavailable,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// 安定したコード文字列を取得
    ///
    /// ## Returns
    /// ログや診断出力で使う SCREAMING_SNAKE_CASE の識別子
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
    /// ```
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::PermissionDenied => "PERMISSION_DENIED",
            ErrorKind::CorruptData => "CORRUPT_DATA",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::Unavailable => "UNAVAILABLE",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.as_str(), "Invalid Input");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::PermissionDenied => "Permission Denied",
            ErrorKind::CorruptData => "Corrupt Data",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// 再試行で回復し得るエラーかどうかを判定
    ///
    /// `Timeout` と `Unavailable` は一時的な障害として `true` を返します。
    #[inline]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Timeout | ErrorKind::Unavailable)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ErrorKind::InvalidInput.code(), "INVALID_INPUT");
        assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
        assert_eq!(ErrorKind::PermissionDenied.code(), "PERMISSION_DENIED");
        assert_eq!(ErrorKind::CorruptData.code(), "CORRUPT_DATA");
        assert_eq!(ErrorKind::Timeout.code(), "TIMEOUT");
        assert_eq!(ErrorKind::Unavailable.code(), "UNAVAILABLE");
        assert_eq!(ErrorKind::Internal.code(), "INTERNAL");
    }

    #[test]
    fn test_code_matches_serde_name() {
        let json = serde_json::to_string(&ErrorKind::CorruptData).unwrap();
        assert_eq!(json, "\"CORRUPT_DATA\"");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::Timeout.is_retryable());
        assert!(ErrorKind::Unavailable.is_retryable());
        assert!(!ErrorKind::CorruptData.is_retryable());
        assert!(!ErrorKind::Internal.is_retryable());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorKind::Internal.to_string(), "Internal Error");
    }
}
