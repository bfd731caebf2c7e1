/// Display descriptor for one message in the list.
///
/// Styling (border, alignment, padding) belongs to the UI crate; the core
/// only decides what is shown and in which order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCard {
    pub position: usize,
    pub text: String,
}

/// Build the full list of cards from `messages`, one per message, in order.
///
/// Always rebuilds from scratch; callers never patch a previous result.
pub fn render(messages: &[String]) -> Vec<MessageCard> {
    messages
        .iter()
        .enumerate()
        .map(|(position, text)| MessageCard {
            position,
            text: text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_messages_render_nothing() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn one_card_per_message_in_order() {
        let messages = vec!["first".to_string(), "second".to_string()];
        let cards = render(&messages);
        assert_eq!(
            cards,
            vec![
                MessageCard {
                    position: 0,
                    text: "first".into()
                },
                MessageCard {
                    position: 1,
                    text: "second".into()
                },
            ]
        );
    }

    #[test]
    fn duplicate_texts_stay_distinct_cards() {
        let messages = vec!["Please enter a name.".to_string(); 3];
        let cards = render(&messages);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].position, 2);
    }
}
