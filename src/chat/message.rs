use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

type Listener<'a> = Box<dyn FnMut(&Message) + 'a>;

/// Append-only conversation log. Messages are never edited once pushed.
#[derive(Default)]
pub struct Transcript<'a> {
    messages: Vec<Message>,
    next_seq: u64,
    listener: Option<Listener<'a>>,
}

impl<'a> Transcript<'a> {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_seq: 0,
            listener: None,
        }
    }

    /// Called with every message appended from now on.
    pub fn listen(&mut self, listener: impl FnMut(&Message) + 'a) {
        self.listener = Some(Box::new(listener));
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>) -> &Message {
        let sent_at = Utc::now();
        self.next_seq += 1;
        let message = Message {
            id: format!("{}-{}", sent_at.timestamp_millis(), self.next_seq),
            role,
            text: text.into(),
            sent_at,
        };

        if let Some(listener) = self.listener.as_mut() {
            listener(&message);
        }

        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
