//! Phone mockup that plays a short chat conversation on a timer loop.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::viewport::use_in_view_once;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: &'static str,
    pub sender: Sender,
}

const fn user(text: &'static str) -> ChatMessage {
    ChatMessage { text, sender: Sender::User }
}

const fn bot(text: &'static str) -> ChatMessage {
    ChatMessage { text, sender: Sender::Bot }
}

pub const DEFAULT_CHAT: [ChatMessage; 11] = [
    user("Yo, Michi!"),
    user("Have you heard of floneo?"),
    bot("Hi, Michi"),
    bot("No, I haven't. What is it?"),
    user("It's an app for managing your finances"),
    user("Check it out 😊"),
    bot("Wow 😍😍😍"),
    bot("It looks very convenient and modern! I want to try it"),
    user("Really cool App"),
    user("😍"),
    bot("Already installed it! Thanks!"),
];

const START_DELAY_MS: u32 = 2000;
const TYPING_MS: u32 = 1500;
const AFTER_USER_MS: u32 = 1500;
const AFTER_BOT_MS: u32 = 2000;
const HOLD_MS: u32 = 6000;

/// Where the conversation currently is: how many messages are visible and
/// whether the bot is "typing" the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChatStage {
    pub shown: usize,
    pub typing: bool,
}

impl ChatStage {
    /// Wait before [`ChatStage::advance`] should run.
    pub fn delay_ms(&self, script: &[ChatMessage]) -> u32 {
        if self.typing {
            return TYPING_MS;
        }
        match self.shown {
            0 => START_DELAY_MS,
            n if n >= script.len() => HOLD_MS,
            n => match script[n - 1].sender {
                Sender::User => AFTER_USER_MS,
                Sender::Bot => AFTER_BOT_MS,
            },
        }
    }

    /// Bot replies get a typing indicator first; the loop restarts once the
    /// whole script has been held on screen.
    pub fn advance(self, script: &[ChatMessage]) -> ChatStage {
        if self.typing {
            return ChatStage { shown: self.shown + 1, typing: false };
        }
        match script.get(self.shown) {
            None => ChatStage::default(),
            Some(next) if next.sender == Sender::Bot => ChatStage { shown: self.shown, typing: true },
            Some(_) => ChatStage { shown: self.shown + 1, typing: false },
        }
    }
}

#[function_component(ChatMockup)]
pub fn chat_mockup() -> Html {
    let phone_ref = use_node_ref();
    let in_view = use_in_view_once(phone_ref.clone(), 0.3);
    let stage = use_state(ChatStage::default);

    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |(in_view, current): &(bool, ChatStage)| {
                let timeout = in_view.then(|| {
                    let next = current.advance(&DEFAULT_CHAT);
                    Timeout::new(current.delay_ms(&DEFAULT_CHAT), move || stage_setter.set(next))
                });
                move || drop(timeout)
            },
            (in_view, *stage),
        );
    }

    html! {
        <section class="human-touch">
            <h2 class="human-touch-title">
                <span class="slide-left">{"Human"}</span>
                <span class="slide-right">{"Touch"}</span>
            </h2>
            <div ref={phone_ref} class="phone-mockup">
                <div class="phone-notch"></div>
                <div class="chat-container">
                    {
                        DEFAULT_CHAT.iter().take(stage.shown).enumerate().map(|(i, message)| {
                            let side = match message.sender {
                                Sender::User => "chat-bubble user",
                                Sender::Bot => "chat-bubble bot",
                            };
                            html! { <div key={i} class={side}>{message.text}</div> }
                        }).collect::<Html>()
                    }
                    if stage.typing {
                        <div class="chat-bubble bot typing">
                            <span></span><span></span><span></span>
                        </div>
                    }
                </div>
            </div>
            <style>
                {r#"
                .human-touch {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 120px 24px;
                    background: #fff;
                    overflow: hidden;
                }
                .human-touch-title {
                    font-size: clamp(3rem, 10vw, 8rem);
                    font-weight: 600;
                    display: flex;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                @keyframes slideFromLeft {
                    from { transform: translateX(-60%); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                @keyframes slideFromRight {
                    from { transform: translateX(60%); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                .slide-left { animation: slideFromLeft 0.8s ease-out both; }
                .slide-right { animation: slideFromRight 0.8s ease-out both; }
                .phone-mockup {
                    width: 320px;
                    height: 620px;
                    border-radius: 44px;
                    background: #111;
                    padding: 16px;
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.25);
                    position: relative;
                }
                .phone-notch {
                    width: 120px;
                    height: 24px;
                    border-radius: 0 0 16px 16px;
                    background: #111;
                    position: absolute;
                    top: 16px;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 2;
                }
                .chat-container {
                    height: 100%;
                    border-radius: 32px;
                    background: #f4f4f8;
                    padding: 48px 14px 14px;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    gap: 8px;
                    overflow: hidden;
                }
                @keyframes bubbleIn {
                    from { transform: translateY(10px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .chat-bubble {
                    max-width: 75%;
                    padding: 10px 14px;
                    border-radius: 18px;
                    font-size: 0.95rem;
                    animation: bubbleIn 0.3s ease-out;
                }
                .chat-bubble.user {
                    align-self: flex-end;
                    background: #1E90FF;
                    color: #fff;
                }
                .chat-bubble.bot {
                    align-self: flex-start;
                    background: #fff;
                    color: #222;
                }
                @keyframes typingDot {
                    0%, 80%, 100% { opacity: 0.2; }
                    40% { opacity: 1; }
                }
                .chat-bubble.typing span {
                    display: inline-block;
                    width: 6px;
                    height: 6px;
                    margin: 0 2px;
                    border-radius: 50%;
                    background: #999;
                    animation: typingDot 1.2s infinite;
                }
                .chat-bubble.typing span:nth-child(2) { animation-delay: 0.2s; }
                .chat-bubble.typing span:nth-child(3) { animation-delay: 0.4s; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_appear_without_typing() {
        let stage = ChatStage::default().advance(&DEFAULT_CHAT);
        assert_eq!(stage, ChatStage { shown: 1, typing: false });
        assert_eq!(ChatStage::default().delay_ms(&DEFAULT_CHAT), START_DELAY_MS);
        assert_eq!(stage.delay_ms(&DEFAULT_CHAT), AFTER_USER_MS);
    }

    #[test]
    fn bot_messages_are_typed_first() {
        let before_bot = ChatStage { shown: 2, typing: false };
        let typing = before_bot.advance(&DEFAULT_CHAT);
        assert_eq!(typing, ChatStage { shown: 2, typing: true });
        assert_eq!(typing.delay_ms(&DEFAULT_CHAT), TYPING_MS);

        let shown = typing.advance(&DEFAULT_CHAT);
        assert_eq!(shown, ChatStage { shown: 3, typing: false });
        assert_eq!(shown.delay_ms(&DEFAULT_CHAT), AFTER_BOT_MS);
    }

    #[test]
    fn full_run_holds_then_restarts() {
        let mut stage = ChatStage::default();
        let mut steps = 0;
        while stage.shown < DEFAULT_CHAT.len() {
            stage = stage.advance(&DEFAULT_CHAT);
            steps += 1;
            assert!(steps < 100);
        }
        let bots = DEFAULT_CHAT.iter().filter(|m| m.sender == Sender::Bot).count();
        assert_eq!(steps, DEFAULT_CHAT.len() + bots);
        assert_eq!(stage.delay_ms(&DEFAULT_CHAT), HOLD_MS);
        assert_eq!(stage.advance(&DEFAULT_CHAT), ChatStage::default());
    }
}
