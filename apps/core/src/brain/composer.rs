//! Reply formatting: intro phrases, canned lines and content cards.

use super::mood::Mood;
use crate::content::{MusicTrack, NEPALI_PREFIX};

pub const GREETINGS: &[&str] = &[
    "Hello! I'm here to support your mental wellness journey. How are you arriving to our conversation today? 😊",
    "Welcome! Let's begin by checking in with where you are right now: emotionally, mentally, physically. What's present for you?",
    "Hi there! I'm ready to listen and support in whatever way feels right for you today. How can I be most helpful?",
    "Hello! Before we dive in, take a conscious breath. I'm here to meet you exactly where you are. What would you like to explore? 🌟",
];

pub const FAREWELLS: &[&str] = &[
    "Thank you for sharing this time with me. Remember to carry forward whatever was helpful, and leave what wasn't. Take gentle care of yourself today. 🌈",
    "Our conversation matters. I appreciate you investing in your mental wellbeing. Wishing you peace and clarity as you move through your day. ✨",
    "I'm grateful for our connection today. Remember: You have resources within you, and support around you. Be kind to yourself. 💖",
    "Thank you for trusting me with your experience. May you move forward with greater self-awareness and compassion. You've got this! 🌟",
];

pub const SMALL_TALK: &[&str] = &[
    "Thank you for asking! I'm here and fully present to support you. How are you feeling today?",
    "I'm doing well, and I'm focused on being here for you. How has your day been so far?",
    "I'm present and ready to listen. Thanks for checking in! How are you really doing?",
];

pub const EMPATHY: &[&str] = &[
    "Thank you for sharing that with me. I'm listening with care and attention. 🤗",
    "I hear you. Would you like to explore this further, or would supportive resources be more helpful right now? 💭",
    "That sounds important. How is this sitting with you emotionally and physically?",
    "I'm fully present with what you're sharing. Your experience matters here. 💫",
    "Thank you for being open with me. Let's proceed in whatever way feels most supportive for you. 🌟",
];

pub const FEAR_LINES: &[&str] = &[
    "Fear can be overwhelming, but it's also a natural protective response. Let's look at some concrete ways to work with it. 🛡️",
    "I hear you're dealing with fear. This emotion often points to something we care deeply about. Here are some constructive steps.",
    "Fear can feel paralyzing. Breaking it down into smaller, manageable pieces helps.",
    "Fear is often about anticipating future threats. Bringing your attention to the present moment can reduce its intensity.",
];

pub const OVERCOME_LINES: &[&str] = &[
    "Overcoming challenges often starts with small, manageable steps. 🌱",
    "The desire to overcome something shows your resilience! Here are some practical strategies.",
    "Overcoming obstacles is a process. Let's break what you're facing into smaller pieces.",
];

pub const SUPPORT_LINE: &str =
    "I hear you're seeking support with emotional challenges. Here are some strategies that might help right now. 💭";

pub const CHEER_UP_OPENER: &str = "I'd be happy to help cheer you up! ";

const HAPPY_LINES: &[&str] = &[
    "It's wonderful to hear you're experiencing happiness! These moments are precious for our wellbeing. What's bringing you this joy today? 😊",
    "Your positive energy is truly uplifting! Celebrating these good moments helps build emotional resilience. ✨",
    "Happiness looks great on you! Noticing what creates these positive states can help us cultivate more of them in daily life.",
    "That's fantastic! Positive emotions like happiness help broaden our perspective and build psychological resources.",
    "I'm delighted to hear you're feeling happy! Would you like to explore how to extend or deepen this positive state?",
];

const SAD_LINES: &[&str] = &[
    "I hear you're feeling sad, and I want you to know that's completely valid. These feelings, though difficult, are part of the human experience. 💙",
    "Sadness can feel heavy, and I'm here to sit with you in it. There's no need to rush through these feelings; they have their own timing.",
    "I appreciate you sharing that you're feeling sad. It takes courage to acknowledge these emotions. How can I best support you right now?",
    "Your sadness matters, and so do you. Would gentle conversation or a supportive activity feel more helpful at this moment?",
    "I'm with you in this. Sadness often points to what we care deeply about. Would you like to talk about what's coming up for you?",
];

const SAD_CHEER_UP_LINES: &[&str] = &[
    "I hear you want some cheering up, and that's a proactive step for your wellbeing! Let me help you find some uplifting support. 🌈",
    "Wanting to shift from sadness shows self-awareness. I have some encouraging resources that might help lift your spirits.",
    "It takes strength to ask for cheering up when feeling low. Let's explore some options that might bring you some lightness.",
    "I understand you're looking for a mood boost. Here are some uplifting approaches we could try together.",
    "Thank you for letting me know you'd like cheering up. That's an important step in emotional self-care.",
];

const LONELY_LINES: &[&str] = &[
    "Loneliness can feel isolating, and I want you to know I'm here with you. These feelings are valid and shared by many. 💙",
    "I hear the loneliness. It takes courage to acknowledge these feelings. Would companionship through conversation or comforting resources help?",
    "Loneliness can be particularly difficult. I'm here to provide company in whatever way feels supportive right now.",
    "Your feelings of loneliness matter. Sometimes gentle, comforting resources can help ease the sense of isolation.",
    "I'm with you in this loneliness. Would you like to talk about what comes up with these feelings, or try some comforting support?",
];

const ANGRY_LINES: &[&str] = &[
    "Anger often signals that something important to us feels threatened or unfair. Would you like to explore what's beneath this feeling? 🌬️",
    "I hear the frustration in your words. Anger needs safe expression. Would movement, writing, or breath work feel supportive right now?",
    "That anger makes sense given what you're experiencing. Let's find a constructive way to channel this energy together.",
    "Anger can be protective energy. How can we work with it in a way that feels empowering rather than overwhelming?",
    "I'm here with you through this anger. Sometimes naming what we're angry about helps us understand what matters to us most.",
];

const ANXIOUS_LINES: &[&str] = &[
    "Anxiety often points to something that feels uncertain or unsafe. Let's ground in what's actually here and now together. 🛡️",
    "I hear the anxiety in your words. Would you like to try a grounding exercise, or just talk through what's coming up?",
    "That worried feeling is trying to protect you. Let's thank it for its concern, then gently focus on what's within your control.",
    "Anxiety can feel overwhelming, but you're not alone with it. What's the smallest, safest step we could take from here?",
    "I'm here with you through this anxiety. Sometimes breaking it down into manageable pieces helps reduce its intensity.",
];

const NEUTRAL_LINES: &[&str] = &[
    "A neutral state can be a peaceful resting place between emotions. Would you like to explore this calm space with gentle curiosity? 🍃",
    "Sometimes 'neutral' is exactly what we need: a breather from emotional intensity. How does this state feel in your body?",
    "Neutrality has its own wisdom. It can be a great opportunity for gentle self-check-in without pressure.",
    "Being in a neutral state allows for reflection without emotional charge. What would feel supportive right now?",
    "I hear you're feeling neutral. This can be a good space to practice mindfulness or simply rest in being.",
];

const TIRED_LINES: &[&str] = &[
    "Feeling tired can be your system's way of asking for rest and restoration. What would true rest look like for you right now? 😴",
    "Fatigue often carries messages about our pace or needs. Let's explore what your body might be telling you.",
    "Rest is productive. It's how we restore our capacity. What's one small way to honor your need for restoration today?",
    "I hear the tiredness. Sometimes gentle, low-energy activities can be most restorative when we're feeling drained.",
    "Your body is asking for care through this tiredness. How can we support that need together?",
];

const MOTIVATIONAL_LINES: &[&str] = &[
    "I hear you're looking for motivation! Sometimes we all need that extra push. What specific area of your life are you looking to energize? 💪",
    "Motivation often starts with small, actionable steps. What's one tiny thing you could do right now to build momentum?",
    "The desire for motivation itself is a great starting point! Let's explore what inspires and energizes you.",
    "I'm here to help you find that motivational spark! Would specific strategies, inspiring content, or practical steps be most helpful?",
    "Motivation grows from action. What's one small commitment you could make to yourself today?",
];

/// Canned response set for a mood. Sadness splits on the cheer-up flag.
pub fn mood_lines(mood: Mood, cheer_up: bool) -> &'static [&'static str] {
    match mood {
        Mood::Happy => HAPPY_LINES,
        Mood::Sad if cheer_up => SAD_CHEER_UP_LINES,
        Mood::Sad => SAD_LINES,
        Mood::Lonely => LONELY_LINES,
        Mood::Anxious => ANXIOUS_LINES,
        Mood::Angry => ANGRY_LINES,
        Mood::Tired => TIRED_LINES,
        Mood::Neutral => NEUTRAL_LINES,
        Mood::Motivational => MOTIVATIONAL_LINES,
    }
}

/// How a quote reply is framed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFraming {
    First,
    Another,
    Shorthand,
}

pub fn quote(framing: QuoteFraming, text: &str) -> String {
    let intro = match framing {
        QuoteFraming::First => "Here's a perspective that might resonate:",
        QuoteFraming::Another => "Here's another thought for you:",
        QuoteFraming::Shorthand => "Here's another quote for you:",
    };
    format!("{}\n\n\"{}\"", intro, text)
}

pub fn poem(key: &str, text: &str) -> String {
    if key.starts_with(NEPALI_PREFIX) {
        return format!("Here's a Nepali poem for you:\n\n{}", text);
    }
    let intro = match key {
        "happy" => "Here's a joyful poem for you:",
        "sad" => "Here's a poem that understands sadness:",
        "motivational" => "Here's an encouraging poem:",
        "lonely" => "Here's a poem about solitude:",
        "calming" => "Here's a calming poem:",
        "uplifting" => "Here's an uplifting poem:",
        _ => "Here's a poem for you:",
    };
    format!("{}\n\n{}", intro, text)
}

pub fn exercise_tip(mood: Option<Mood>, tip: &str) -> String {
    let intro = match mood {
        Some(Mood::Happy) => "To celebrate your happy mood, here's an energizing exercise idea:",
        Some(Mood::Sad) => "For moments of sadness, gentle movement can be particularly helpful:",
        Some(Mood::Lonely) => "When feeling lonely, these exercises might help create connection:",
        Some(Mood::Anxious) => "For anxiety relief, try this grounding exercise:",
        Some(Mood::Angry) => "To safely channel angry energy, consider this exercise:",
        Some(Mood::Tired) => "When feeling tired, gentle movement can actually boost energy:",
        Some(Mood::Motivational) => "To build motivation, start with this achievable exercise:",
        Some(Mood::Neutral) | None => "For your current state, here's a balanced exercise suggestion:",
    };
    format!("{}\n\n{}", intro, tip)
}

pub fn music_intro(mood: Option<Mood>, cheer_up: bool) -> &'static str {
    match (mood, cheer_up) {
        (Some(Mood::Sad), true) => "To help cheer you up, here's some uplifting music:",
        (_, true) => "To boost your mood, here's some uplifting music:",
        (Some(Mood::Happy), _) => "To amplify your happy mood, here's some celebratory music:",
        (Some(Mood::Sad), _) => "For your current mood, here's some supportive music:",
        (Some(Mood::Lonely), _) => "For moments of loneliness, here's some comforting music:",
        (Some(Mood::Anxious), _) => "To help calm and ground your anxiety, try this:",
        (Some(Mood::Angry), _) => "To help channel or calm your anger, this might help:",
        (Some(Mood::Tired), _) => "For restorative support when feeling tired:",
        (Some(Mood::Motivational), _) => "To boost your motivation, here's some inspiring music:",
        (Some(Mood::Neutral), _) | (None, _) => "For your current state, here's some balanced music:",
    }
}

pub fn music_card(intro: &str, track: &MusicTrack) -> String {
    format!(
        "{}\n\n🎵 **{}**\n🔗 {}\n💡 {}",
        intro, track.title, track.url, track.description
    )
}

/// Constructive steps suggested for a mood, in order.
pub fn action_steps(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Sad => &[
            "Name the feeling out loud or on paper without judging it.",
            "Do one small act of care: a glass of water, fresh air, a shower.",
            "Reach out to one person you trust, even with a short message.",
            "Try gentle movement such as a ten-minute walk.",
            "Plan one small thing to look forward to tomorrow.",
        ],
        Mood::Anxious => &[
            "Slow your breathing: in for 4, hold for 4, out for 6.",
            "Ground yourself with 5-4-3-2-1: things you see, feel, hear, smell, taste.",
            "Write the worry down and circle the part within your control.",
            "Pick the smallest next step and do only that.",
            "Limit caffeine and news for the rest of the day.",
        ],
        Mood::Angry => &[
            "Pause before acting: step away for a few minutes.",
            "Release the energy physically with a brisk walk or some push-ups.",
            "Write what triggered you and what need feels unmet.",
            "Cool down with long exhales before any conversation.",
            "Decide on one calm, constructive action to take later.",
        ],
        Mood::Lonely => &[
            "Send a message to someone you haven't talked to in a while.",
            "Spend time in a shared space: a cafe, a library, a park.",
            "Join a group or class around something you enjoy.",
            "Offer help to someone; connection often starts with giving.",
            "Treat yourself with the kindness you'd show a good friend.",
        ],
        Mood::Tired => &[
            "Check the basics: water, food, and a short rest.",
            "Take a 10 to 20 minute nap or a quiet break without screens.",
            "Step outside for daylight and a few slow breaths.",
            "Drop or postpone one non-essential task today.",
            "Set a wind-down routine and an earlier bedtime tonight.",
        ],
        Mood::Happy => &[
            "Savor it: note what exactly made you feel this way.",
            "Share the good news with someone who matters to you.",
            "Channel the energy into something you've been putting off.",
            "Write it down so you can revisit it on harder days.",
        ],
        Mood::Motivational => &[
            "Define one clear, specific goal for today.",
            "Break it into steps small enough to start in five minutes.",
            "Start with the first step right now, before you feel ready.",
            "Track your progress and celebrate small wins.",
            "Remind yourself why this goal matters to you.",
        ],
        Mood::Neutral => &[
            "Check in with yourself: body, thoughts, feelings.",
            "Pick one small thing that would make today a bit better.",
            "Move your body for a few minutes.",
            "Connect with someone, even briefly.",
            "Take a mindful pause and notice what's around you.",
        ],
    }
}

pub fn strategies_intro(mood: Mood) -> String {
    format!("Here are some strategies that can help when you're feeling {}:", mood)
}

pub fn what_to_do_lines(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Sad => &[
            "When feeling sad, gentle self-care activities can help.",
            "Sadness often responds well to gentle activities. Here's a place to start.",
        ],
        Mood::Anxious => &[
            "For anxiety, grounding and structure can help.",
            "When anxious, focusing on the present moment helps. Try these steps.",
        ],
        Mood::Angry => &[
            "Anger can be channeled constructively.",
            "Angry energy needs safe expression. Here are some constructive outlets.",
        ],
        Mood::Tired => &[
            "When tired, gentle restoration is key.",
            "Fatigue calls for gentle care. Consider these steps.",
        ],
        _ => &[
            "Here are a few supportive steps you could take.",
            "Let me offer you some constructive options for right now.",
        ],
    }
}

/// Intro line followed by a numbered list of steps for the mood.
pub fn action_plan(intro: &str, mood: Mood) -> String {
    let steps = action_steps(mood)
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<String>>()
        .join("\n");
    format!("{}\n\n{}", intro, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Energy;

    #[test]
    fn test_every_mood_has_lines_and_steps() {
        for mood in Mood::ALL {
            assert!(!mood_lines(mood, false).is_empty());
            assert!(!what_to_do_lines(mood).is_empty());
            assert!(action_steps(mood).len() >= 4);
        }
        assert_ne!(mood_lines(Mood::Sad, true), mood_lines(Mood::Sad, false));
        assert_eq!(mood_lines(Mood::Happy, true), mood_lines(Mood::Happy, false));
    }

    #[test]
    fn test_action_plan_is_numbered() {
        let plan = action_plan("Intro", Mood::Anxious);
        assert!(plan.starts_with("Intro\n\n1. "));
        assert!(plan.contains("\n2. "));
    }

    #[test]
    fn test_music_card_format() {
        let track = MusicTrack {
            id: "sad_1".to_string(),
            title: "Happy".to_string(),
            url: "https://example.com".to_string(),
            description: "Uplifting".to_string(),
            energy: Energy::High,
        };
        let card = music_card(music_intro(Some(Mood::Sad), true), &track);
        assert_eq!(
            card,
            "To help cheer you up, here's some uplifting music:\n\n🎵 **Happy**\n🔗 https://example.com\n💡 Uplifting"
        );
    }

    #[test]
    fn test_poem_intro_by_key() {
        assert!(poem("nepali_sad", "x").starts_with("Here's a Nepali poem"));
        assert!(poem("calming", "x").starts_with("Here's a calming poem"));
        assert!(poem("unknown", "x").starts_with("Here's a poem for you"));
    }
}
