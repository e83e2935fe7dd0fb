/// One of the four inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// The `name` attribute of the rendered input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    /// Input `type` attribute. `None` for the multi-line message, which is a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::Name => Some("text"),
            FormField::Email => Some("email"),
            FormField::Phone => Some("tel"),
            FormField::Message => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Name*",
            FormField::Email => "Email*",
            FormField::Phone => "Phone Number*",
            FormField::Message => "Message",
        }
    }

    // Enforced by the browser, never by the draft itself.
    pub fn required(self) -> bool {
        !matches!(self, FormField::Message)
    }
}

/// The user-visible confirmation shown after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub description: &'static str,
}

impl Acknowledgment {
    pub fn message_sent() -> Self {
        Self {
            title: "Message Sent!",
            description: "Thank you for contacting us. We'll get back to you soon.",
        }
    }
}

/// In-progress values of the contact form, owned by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Replaces the whole value of one field.
    pub fn update_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Clears every field and hands back the acknowledgment to display.
    /// Nothing leaves the page, so this cannot fail.
    pub fn submit(&mut self) -> Acknowledgment {
        *self = Self::default();
        Acknowledgment::message_sent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let draft = ContactFormDraft::default();
        for field in FormField::ALL {
            assert_eq!(draft.field(field), "");
        }
    }

    #[test]
    fn field_updates_do_not_interfere() {
        let mut draft = ContactFormDraft::default();
        draft.update_field(FormField::Name, "J".to_string());
        draft.update_field(FormField::Email, "j@x.com".to_string());
        draft.update_field(FormField::Name, "Jane".to_string());
        draft.update_field(FormField::Message, "Hello\nthere".to_string());
        draft.update_field(FormField::Phone, "07000000000".to_string());
        draft.update_field(FormField::Message, String::new());

        assert_eq!(draft.field(FormField::Name), "Jane");
        assert_eq!(draft.field(FormField::Email), "j@x.com");
        assert_eq!(draft.field(FormField::Phone), "07000000000");
        assert_eq!(draft.field(FormField::Message), "");
    }

    #[test]
    fn values_are_stored_verbatim() {
        let mut draft = ContactFormDraft::default();
        let long = "<b>x</b>".repeat(10_000);
        draft.update_field(FormField::Message, long.clone());
        assert_eq!(draft.message, long);
    }

    #[test]
    fn submit_acknowledges_once_and_resets() {
        let mut draft = ContactFormDraft::default();
        draft.update_field(FormField::Name, "Jane".to_string());
        draft.update_field(FormField::Email, "jane@x.com".to_string());
        draft.update_field(FormField::Phone, "07000000000".to_string());

        let ack = draft.submit();

        assert_eq!(ack.title, "Message Sent!");
        assert_eq!(
            ack.description,
            "Thank you for contacting us. We'll get back to you soon."
        );
        for field in FormField::ALL {
            assert_eq!(draft.field(field), "");
        }
    }

    #[test]
    fn submit_on_empty_draft_still_acknowledges() {
        let mut draft = ContactFormDraft::default();
        assert_eq!(draft.submit(), Acknowledgment::message_sent());
        assert_eq!(draft.submit(), Acknowledgment::message_sent());
        assert_eq!(draft, ContactFormDraft::default());
    }

    #[test]
    fn field_attributes() {
        let names: Vec<_> = FormField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["name", "email", "phone", "message"]);
        assert_eq!(FormField::Email.input_type(), Some("email"));
        assert_eq!(FormField::Phone.input_type(), Some("tel"));
        assert_eq!(FormField::Message.input_type(), None);
        assert!(FormField::Name.required());
        assert!(FormField::Email.required());
        assert!(FormField::Phone.required());
        assert!(!FormField::Message.required());
    }
}
