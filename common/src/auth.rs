//! 访问权限状态机
//!
//! 每种模式各自维护 Locked/Unlocked 两个状态。密钥逐字比对，
//! 匹配即解锁，不匹配保持锁定并报错。会话内解锁不可回退，
//! 没有锁定计数，也不限制重试。

use crate::error::{Error, Result};
use crate::mode::Mode;

/// 各模式的解锁状态（会话级，初始全部锁定）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthState {
    diagnostic: bool,
    reader: bool,
}

impl AuthState {
    pub fn is_unlocked(&self, mode: Mode) -> bool {
        match mode {
            Mode::Diagnostic => self.diagnostic,
            Mode::Reader => self.reader,
        }
    }

    /// 校验密钥并在匹配时解锁对应模式
    ///
    /// # Returns
    /// * `Ok(())` - 密钥匹配，模式已解锁
    /// * `Err(Error::AuthDenied)` - 密钥不匹配，状态不变
    pub fn submit_password(&mut self, mode: Mode, candidate: &str) -> Result<()> {
        if candidate != mode.access_code() {
            return Err(Error::AuthDenied);
        }
        match mode {
            Mode::Diagnostic => self.diagnostic = true,
            Mode::Reader => self.reader = true,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_all_locked() {
        let auth = AuthState::default();
        assert!(!auth.is_unlocked(Mode::Diagnostic));
        assert!(!auth.is_unlocked(Mode::Reader));
    }

    #[test]
    fn test_wrong_then_right_password() {
        let mut auth = AuthState::default();

        // 先错后对：错误密钥报错且保持锁定，正确密钥解锁
        let denied = auth.submit_password(Mode::Diagnostic, "9999");
        assert!(matches!(denied, Err(Error::AuthDenied)));
        assert!(!auth.is_unlocked(Mode::Diagnostic));

        auth.submit_password(Mode::Diagnostic, "0006").unwrap();
        assert!(auth.is_unlocked(Mode::Diagnostic));
    }

    #[test]
    fn test_unlock_is_per_mode() {
        let mut auth = AuthState::default();
        auth.submit_password(Mode::Reader, "4006").unwrap();

        assert!(auth.is_unlocked(Mode::Reader));
        assert!(!auth.is_unlocked(Mode::Diagnostic));
    }

    #[test]
    fn test_wrong_code_for_other_mode_rejected() {
        let mut auth = AuthState::default();
        let denied = auth.submit_password(Mode::Reader, "0006");
        assert!(matches!(denied, Err(Error::AuthDenied)));
        assert!(!auth.is_unlocked(Mode::Reader));
    }

    #[test]
    fn test_unlock_is_monotonic() {
        let mut auth = AuthState::default();
        auth.submit_password(Mode::Diagnostic, "0006").unwrap();

        // 解锁后任何后续操作都不会回退状态
        let _ = auth.submit_password(Mode::Diagnostic, "9999");
        let _ = auth.submit_password(Mode::Reader, "wrong");
        auth.submit_password(Mode::Reader, "4006").unwrap();

        assert!(auth.is_unlocked(Mode::Diagnostic));
        assert!(auth.is_unlocked(Mode::Reader));
    }

    #[test]
    fn test_retries_unlimited() {
        let mut auth = AuthState::default();
        for _ in 0..64 {
            assert!(auth.submit_password(Mode::Diagnostic, "bad").is_err());
        }
        auth.submit_password(Mode::Diagnostic, "0006").unwrap();
        assert!(auth.is_unlocked(Mode::Diagnostic));
    }
}
