/// The single dismissible banner used for degraded-mode messages.
///
/// A fresh message replaces whatever was shown before.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notice {
    message: Option<String>,
}

impl Notice {
    pub fn show(&mut self, message: &str) {
        log::info!("notice: {message}");
        self.message = Some(message.to_string());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notice_replaces_old() {
        let mut notice = Notice::default();
        assert!(!notice.is_visible());
        notice.show("first");
        notice.show("second");
        assert_eq!(notice.message(), Some("second"));
        notice.dismiss();
        assert!(notice.message().is_none());
    }
}
