//! Built-in content pools.

use std::collections::HashMap;

use super::{ContentItem, ContentLibrary, Energy, MusicTrack};

pub(super) fn library() -> ContentLibrary {
    ContentLibrary {
        quotes: quotes(),
        poems: poems(),
        exercise_tips: exercise_tips(),
        music: music(),
    }
}

fn pools(entries: Vec<(&str, Vec<&str>)>) -> HashMap<String, Vec<ContentItem>> {
    entries
        .into_iter()
        .map(|(key, items)| {
            let items = items.into_iter().map(|s| ContentItem::Text(s.to_string())).collect();
            (key.to_string(), items)
        })
        .collect()
}

fn track(id: &str, title: &str, url: &str, description: &str, energy: Energy) -> ContentItem {
    ContentItem::Music(MusicTrack {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        energy,
    })
}

fn quotes() -> HashMap<String, Vec<ContentItem>> {
    pools(vec![
        ("motivational", vec![
            r#"Progress isn't about giant leaps, but about the small, consistent steps we take each day. What's one tiny step forward you could take right now? 💫"#,
            r#"You are capable of amazing things—not because you're superhuman, but because you're human with inherent capacity for growth and adaptation."#,
            r#"Remember: You've already survived 100% of your difficult days. That's evidence of resilience you carry forward."#,
            r#"Small steps still move you forward. Momentum builds from action, no matter how small the initial movement."#,
            r#"Your mental health is a priority, not a luxury. Investing in it is one of the most important commitments you can make."#,
            r#"Be gentle with yourself today. Self-compassion is correlated with greater resilience and wellbeing than self-criticism."#,
            r#"One day at a time, sometimes one moment at a time. Healing and growth follow their own timeline."#,
            r#"You're doing better than you think. Our inner critics often magnify struggles while minimizing strengths."#,
            r#"This feeling is temporary. Emotions are visitors—they come, stay awhile, and eventually make space for others."#,
            r#"You are enough, just as you are. Worth isn't earned through productivity or perfection."#,
        ]),
        ("emotional", vec![
            r#"Your feelings are valid messengers, not problems to be solved. They're telling you something important about your needs and values."#,
            r#"It's okay to not be okay. Authenticity in our emotional experience is the foundation of genuine wellbeing."#,
            r#"Healing isn't linear. It's more like a spiral—we revisit similar places but from new perspectives each time."#,
            r#"Vulnerability is the birthplace of connection and meaning. Sharing our true emotional experience creates authentic relating."#,
            r#"Emotions are energy in motion. They want to move through us, not get stuck within us."#,
            r#"The depth of your feelings reflects the depth of your capacity to experience life fully."#,
            r#"All emotions have intelligence. Even difficult ones carry information about what matters to us."#,
            r#"Being with difficult emotions without judgment is one of the most courageous forms of self-care."#,
            r#"Your emotional landscape is uniquely yours—there's no 'right' way to navigate it."#,
            r#"Feelings aren't facts, but they are real experiences deserving of acknowledgement."#,
        ]),
        ("mindfulness", vec![
            r#"This moment, right now, is the only one you have for sure. What do you notice about your present experience? ⏳"#,
            r#"Be where you are, not where you think you should be. Presence is the foundation of peace."#,
            r#"Feelings come and go like clouds in a windy sky. Conscious breathing is your anchor to the present."#,
            r#"The breath you're taking right now is the only one that exists. The next one hasn't arrived yet."#,
            r#"Ground yourself in what's real: the sensation of breathing, the surface beneath you, the sounds around you."#,
            r#"Mindfulness isn't about emptying the mind, but about noticing what's already there without judgment."#,
            r#"Between stimulus and response there is a space. In that space lies our freedom to choose."#,
            r#"Presence is the greatest gift we can give ourselves—and it's always available, right here, right now."#,
            r#"Notice without judgment, feel without resistance, be without striving."#,
            r#"The present moment holds everything you need for your next step forward."#,
        ]),
        ("uplifting", vec![
            r#"Happiness grows when shared! What made you smile today? 😊"#,
            r#"Joy is contagious - spread some today!"#,
            r#"Celebrate the small moments of happiness - they matter! ✨"#,
            r#"Your positive energy creates ripples of goodness around you."#,
            r#"Happiness looks beautiful on you! Keep shining."#,
            r#"Find joy in the ordinary - it's where magic lives."#,
            r#"Your laughter is medicine for the soul."#,
            r#"Happiness is homemade - create some today!"#,
            r#"Let your light shine! The world needs your joy."#,
            r#"Good vibes only! What's bringing you happiness right now?"#,
        ]),
    ])
}

fn poems() -> HashMap<String, Vec<ContentItem>> {
    pools(vec![
        ("happy", vec![
            r#"Sunlight dances on morning dew,
A heart that's light, a sky that's blue.
Laughter echoes, spirits rise,
Sparkles shining in your eyes.
Joy is found in simple pleasure,
Memories we'll always treasure."#,
            r#"Birds are singing, skies are clear,
Happiness is drawing near.
Smiles are spreading, hearts are light,
Everything feels just so right.
Dance with joy, let worries flee,
Just be you, and you'll be free."#,
            r#"Golden sunshine, warm embrace,
A happy heart, a smiling face.
Butterflies and blooming flowers,
Counting happy morning hours.
Let your spirit freely soar,
Wanting nothing, needing more."#,
        ]),
        ("sad", vec![
            r#"Raindrops fall on window pane,
Echoing my silent pain.
Clouds are gray, the world seems slow,
Feelings only I can know.
But even storms must pass away,
There will come a brighter day."#,
            r#"Tears like rivers, silent streams,
Fading hopes and broken dreams.
Heavy heart and weary soul,
Trying hard to feel whole.
Yet within this depth of night,
There's a distant, gentle light."#,
            r#"Empty rooms and quiet halls,
Echoes of when laughter calls.
Shadows linger, light grows dim,
Memories on a fragile whim.
But seasons change and so will this,
Even sadness finds its bliss."#,
        ]),
        ("motivational", vec![
            r#"Rise again, though you may fall,
Stand up straight and stand up tall.
Every scar tells where you've been,
Every struggle lets you win.
Mountains high or valleys low,
Forward is the way to go."#,
            r#"Step by step, you'll find your way,
Through the night and through the day.
Strength you didn't know you had,
Moments good and moments bad.
Keep on walking, don't look back,
You're still on the forward track."#,
            r#"When the path seems steep and long,
And everything feels wrong,
Remember strength is in the climb,
One small step at a time.
You are braver than you know,
And with each step, you will grow."#,
        ]),
        ("lonely", vec![
            r#"Quiet spaces, empty chair,
Feelings floating in the air.
Moonlight through a silent room,
Chasing away the gloom.
But in the stillness, you will see,
Your own best company."#,
            r#"Stars above, so far away,
Waiting for the light of day.
Solitude can be a friend,
On which you can depend.
In your own space, you will find,
Peace of a different kind."#,
            r#"Silent house and quiet street,
Where your thoughts and feelings meet.
Loneliness is just a season,
With its own unique reason.
Soon you'll find with gentle grace,
Someone takes that empty space."#,
        ]),
        ("calming", vec![
            r#"Breathe in peace, breathe out fear,
Gentle thoughts are drawing near.
Like a river, calm and deep,
Promising a restful sleep.
Let your worries float away,
Welcome in a peaceful day."#,
            r#"Softly now, the world grows still,
Calming every anxious will.
Like a feather, floating down,
Gently settling on the ground.
In this moment, soft and clear,
There is nothing left to fear."#,
            r#"Ocean waves on sandy shore,
Peaceful rhythms, nothing more.
Heartbeat slowing, mind at rest,
Finding what is truly best.
In the quiet, you will see,
How to simply let things be."#,
        ]),
        ("uplifting", vec![
            r#"Lift your eyes to skies above,
Fill your heart with hope and love.
Yesterday is gone and past,
New beginnings are forecast.
You are stronger than you know,
Watch your inner light now grow."#,
            r#"Like a phoenix from the flame,
Rise again and claim your name.
Every ending is a start,
Listen to your hopeful heart.
Bright tomorrows wait for you,
Dreams you're destined to pursue."#,
            r#"Turn the page, begin anew,
Fresh perspectives coming through.
What was heavy, now feels light,
Everything will be alright.
Lift your spirit, lift your voice,
Make the hopeful, happy choice."#,
        ]),
        ("nepali_happy", vec![
            r#"आज फुलको बगैंचामा,
मुस्कानको हावा छ।
दिलमा उल्लासको गीत,
जीवनमा रंग छ।
खुसीको यो पलहरू,
सधैं यादगार हुन्।
आनन्दको संसारमा,
तिम्रो स्वागत छ।"#,
        ]),
        ("nepali_sad", vec![
            r#"आँखामा आँसुको धार,
मनमा उदासी छ।
एक्लोपनको यो अँध्यारो,
कहिले उज्यालो हुन्छ?
तर समय सधैं बदल्छ,
दुःख पनि टर्छ।
आशाको किरणले,
फेरि उज्यालो हुन्छ।"#,
        ]),
        ("nepali_lonely", vec![
            r#"शान्त कक्ष, खाली कोठा,
एक्लोपनको साथ।
चन्द्रमाको चम्किलो किरण,
अँध्यारोमा आशा।
यो एक्लोपन समय हो,
आत्मसँगको भेट।
आफैंमा शान्ति खोज्दा,
पाइन्छ साँचो सुख।"#,
        ]),
        ("nepali_calming", vec![
            r#"श्वास भित्र, शान्ति बाहिर,
चित्त शान्त हुन्छ।
नदीजस्तो बग्न दिनु,
सबै चिन्ता हराउन्छ।
यो पलमा बस्न सिक्नु,
वर्तमानमा जिउन।
शान्तिको महासागरमा,
आफूलाई डुबाउन।"#,
        ]),
        ("nepali_motivational", vec![
            r#"उठ, अगाडि बढ,
पछि नहेर।
जीवनको यात्रामा,
हार नमान।
तिम्रो शक्ति अनन्त छ,
विश्वास गर।
आफूमाथि विश्वास राख,
सफलता तिम्रो पछि आउँछ।"#,
        ]),
        ("nepali_uplifting", vec![
            r#"आकाशतिर हेर,
आशाका बादल छन्।
भोलि सुनौलो दिन आउँछ,
विश्वास गर।
तिम्रो आत्मविश्वासले,
सबै असम्भवलाई सम्भव बनाउँछ।
उठ, अगाडि बढ,
तिम्रो समय आएको छ।"#,
        ]),
    ])
}

fn exercise_tips() -> HashMap<String, Vec<ContentItem>> {
    pools(vec![
        ("sad", vec![
            r#"Gentle movement can help shift sadness. Try a 10-minute walk outside, focusing on your breath and surroundings. Notice the sky, trees, and sounds around you. 🚶‍♀️🌿"#,
            r#"When feeling sad, try '5-4-3-2-1' grounding walk: Notice 5 things you see, 4 things you feel, 3 things you hear, 2 things you smell, and 1 thing you taste while walking."#,
            r#"Gentle yoga or stretching can help release emotional tension. Try a 10-minute beginner yoga video focusing on gentle flows and deep breathing. 🧘‍♀️"#,
            r#"Dance to one uplifting song! Movement releases endorphins. Don't worry about how you look - just move your body freely. 🎵💃"#,
            r#"Try 'walking meditation': Walk slowly, focusing on the sensation of your feet touching the ground with each step. This combines movement with mindfulness."#,
            r#"Swimming or water exercises can be soothing for sadness. The water provides gentle resistance and sensory comfort. 🏊‍♀️"#,
            r#"Simple breathing exercises: Inhale for 4 counts, hold for 4, exhale for 6. Combine with gentle arm raises on the inhale, lower on exhale."#,
            r#"Nature walk with intention: Walk in a park or green space, intentionally noticing colors, textures, and life around you."#,
            r#"Chair exercises: If energy is low, try seated leg lifts, arm circles, and gentle twists while breathing deeply."#,
            r#"Sun salutations: 3-5 rounds of gentle sun salutations can help move energy and lift your mood with the rhythm of movement."#,
        ]),
        ("happy", vec![
            r#"Celebrate your happy energy with joyful movement! Try dancing to your favorite upbeat music for 15 minutes. 🎉💃"#,
            r#"Take your happiness outdoors! Go for a brisk walk or jog while listening to uplifting music or a positive podcast. 🌞🚶‍♂️"#,
            r#"Try a fun fitness class like Zumba, dance cardio, or aerobics to match and amplify your positive energy. 🏋️‍♀️"#,
            r#"Play a sport you enjoy - basketball, tennis, soccer, or any active game that brings you joy and laughter. ⚽😊"#,
            r#"Do a 'gratitude workout': With each exercise, think of something you're grateful for. Combine physical and emotional positivity. 🙏"#,
            r#"Try interval training: Alternate between high-energy bursts (30 seconds) and active recovery (60 seconds) to match your energetic mood."#,
            r#"Group exercise: Join a friend for a workout or join a community fitness event to share your positive energy. 👫"#,
            r#"Adventure workout: Try hiking, rock climbing, or trail running to combine exercise with exploration and joy. 🏞️"#,
            r#"Dance cardio: Follow a dance workout video - it's exercise that feels like celebration!"#,
            r#"Morning energizer: Start your day with 20 minutes of mixed exercises - jumping jacks, squats, push-ups, and stretches to carry happy energy through your day."#,
        ]),
        ("anxious", vec![
            r#"For anxiety, try grounding exercises: Stand firmly, feel your feet on the floor, and do slow, deliberate movements like tai chi. 🧍‍♀️"#,
            r#"Walking in nature can help calm anxious thoughts. Focus on the rhythm of your steps and your breathing. 🍃🚶‍♀️"#,
            r#"Swimming or water exercises provide soothing sensory input that helps reduce anxiety. The water's resistance feels comforting. 🏊‍♂️"#,
            r#"Progressive muscle relaxation: Tense each muscle group for 5 seconds, then release for 10 seconds, moving from toes to head."#,
            r#"Yoga for anxiety: Try gentle poses like child's pose, cat-cow, and legs-up-the-wall with deep, slow breathing. 🧘‍♂️"#,
            r#"Box breathing while walking: Inhale for 4 steps, hold for 4, exhale for 4, hold for 4. This combines movement with anxiety-reducing breathing."#,
            r#"Qigong or tai chi: These slow, flowing movements are specifically designed to calm the nervous system and reduce anxiety."#,
            r#"Walking meditation: Walk slowly in a small circle or straight line, focusing only on the movement of your feet and breath."#,
            r#"Gentle stretching with breath awareness: Hold each stretch for 30 seconds while breathing deeply into the tension."#,
            r#"Mindful movement: Choose any exercise and focus completely on the physical sensations, redirecting attention from anxious thoughts."#,
        ]),
        ("angry", vec![
            r#"Channel angry energy constructively: Try high-intensity exercise like boxing (even shadow boxing), running, or weight lifting. 🥊"#,
            r#"Vigorous cardio helps release anger: Try sprint intervals, jump rope, or intense cycling for 20-30 minutes. 🚴‍♀️"#,
            r#"Martial arts or kickboxing provide structured ways to channel angry energy into focused movement. 👊"#,
            r#"Running outdoors allows you to physically move away from what's upsetting you while releasing endorphins. 🏃‍♂️"#,
            r#"Weight training: Lifting weights can help you feel strong and empowered while physically expressing intense energy. 🏋️‍♂️"#,
            r#"Dance it out: Put on intense music and dance vigorously to release angry energy through movement. 💥🕺"#,
            r#"Punching bag work: If available, use a punching bag to safely express and release anger through physical impact."#,
            r#"Stair climbing: Run or walk briskly up and down stairs - the repetitive motion helps process intense emotions."#,
            r#"Rowing machine: The full-body, rhythmic motion can help channel anger into productive physical exertion."#,
            r#"High-intensity interval training (HIIT): Short bursts of maximum effort followed by brief recovery matches angry energy cycles."#,
        ]),
        ("tired", vec![
            r#"When tired, gentle movement often helps more than resting. Try a 10-minute slow walk to increase circulation. 🚶‍♀️"#,
            r#"Restorative yoga: Focus on supported poses that require minimal effort but increase energy flow. Use props for comfort. 🧘‍♀️"#,
            r#"Chair yoga: Perfect for low energy days. Gentle stretches and breathing exercises while seated can boost energy. 💺"#,
            r#"Walking in sunlight: Even 5-10 minutes outside can help reset your circadian rhythm and boost energy levels. ☀️"#,
            r#"Deep breathing with gentle movement: Inhale while raising arms, exhale while lowering. Repeat 10 times to oxygenate your body."#,
            r#"Tai chi or qigong: These gentle, flowing movements increase energy without exhausting you."#,
            r#"Stretching in bed: Before getting up, do gentle stretches while breathing deeply to awaken your body gently."#,
            r#"Water exercises: The buoyancy reduces strain while movement increases energy. Try gentle swimming or water walking."#,
            r#"5-minute energy boost: Set a timer for 5 minutes and do the gentlest movement you can manage - even just marching in place."#,
            r#"Nature connection walk: Walk slowly in a peaceful place, focusing on breathing and observing nature to gently replenish energy."#,
        ]),
        ("lonely", vec![
            r#"Join a group exercise class - the social connection combined with movement can help ease loneliness. 👥🏋️‍♀️"#,
            r#"Walking with a podcast or audiobook: Feel like you're walking with someone through engaging conversation. 🎧🚶‍♂️"#,
            r#"Dance to music that makes you feel connected - choose songs that uplift or remind you of positive connections. 💃🎵"#,
            r#"Try online workout classes - many offer live sessions where you can see others working out with you. 💻"#,
            r#"Walking in public spaces: Being around others while moving can provide a sense of community without pressure to interact. 🏙️"#,
            r#"Partner exercises: Even imaginary - do exercises that typically involve partners, focusing on the rhythm and intention."#,
            r#"Exercise while video calling a friend: You don't have to talk much - just having someone there can ease loneliness."#,
            r#"Join a running or walking group: Many communities have free groups that meet regularly for social exercise."#,
            r#"Follow along with cheerful workout videos: Choose instructors who have warm, engaging personalities."#,
            r#"Gardening or outdoor activity: Caring for plants while moving your body can create a sense of companionship with nature. 🌱"#,
        ]),
        ("neutral", vec![
            r#"Try something new! When in a neutral state, it's a great time to explore different types of exercise. 🆕"#,
            r#"Balance-focused activities: Try yoga, Pilates, or balance exercises to enhance mind-body connection. ⚖️"#,
            r#"Mindful walking: Walk at a moderate pace while paying attention to your breath and surroundings. 🚶‍♀️"#,
            r#"Strength training: Neutral moods are great for focused, consistent strength building. 🏋️‍♀️"#,
            r#"Swimming: The sensory experience of water can be both energizing and calming in neutral states. 🏊‍♂️"#,
            r#"Cycling: Steady, rhythmic pedaling matches neutral energy well - neither too intense nor too gentle. 🚴‍♀️"#,
            r#"Hatha yoga: Balanced poses and breath work that suit neutral emotional states perfectly. 🧘‍♂️"#,
            r#"Functional fitness: Exercises that mimic daily movements - squats, lifts, carries - practical and grounding."#,
            r#"Interval walking: Alternate between 3 minutes brisk walking and 2 minutes moderate walking for balanced challenge."#,
            r#"Body awareness practice: Slow movements focusing on how each part of your body feels and moves."#,
        ]),
        ("motivational", vec![
            r#"Start with small, achievable goals: 10 minutes of exercise is better than none. Build consistency first! 💪"#,
            r#"Create an energizing playlist: Music with strong beats can boost motivation during workouts. 🎵"#,
            r#"Find an 'accountability buddy': Exercise with a friend or join a challenge to stay motivated. 👫"#,
            r#"Mix it up: Try different exercises to prevent boredom - variety keeps motivation high. 🔄"#,
            r#"Track your progress: Use an app or journal to see how far you've come - progress is motivating! 📈"#,
            r#"Morning movement: Start your day with exercise to build momentum for the rest of the day. 🌅"#,
            r#"Reward yourself: Plan small rewards for completing workouts - non-food treats work best! 🏆"#,
            r#"Visualize success: Before exercising, picture yourself completing the workout feeling strong and accomplished. 🧠"#,
            r#"Break it down: If 30 minutes feels daunting, do three 10-minute sessions throughout the day. ⏱️"#,
            r#"Focus on how you'll feel: Remember the post-workout energy and mood boost as motivation to start. ✨"#,
        ]),
    ])
}

fn music() -> HashMap<String, Vec<ContentItem>> {
    let mut music = HashMap::new();
    music.insert(
        "happy".to_string(),
        vec![
            track("happy_1", r#"Happy Music Mix - Celebration Vibes"#, "https://www.youtube.com/watch?v=yzTuBuRdAyA", r#"Upbeat songs to amplify your joyful mood and positive energy"#, Energy::High),
            track("happy_2", r#"Feel Good Dance Music - Positive Energy"#, "https://www.youtube.com/watch?v=2vjPBrBU-TM", r#"Energetic dance tracks to match and enhance your happy mood"#, Energy::High),
            track("happy_3", r#"Upbeat Positive Energy Mix"#, "https://www.youtube.com/watch?v=3sXebXgQy4s", r#"Music to enhance and extend your positive emotional state"#, Energy::Medium),
            track("happy_4", r#"Joyful Morning Music"#, "https://www.youtube.com/watch?v=GBZ2T6Q1F3Q", r#"Bright, cheerful music to celebrate your happiness"#, Energy::Medium),
        ],
    );
    music.insert(
        "sad".to_string(),
        vec![
            track("sad_1", r#"Uplifting Music for Sad Moments"#, "https://www.youtube.com/watch?v=W6YI3ZFOL0A", r#"Gentle uplifting music to help shift from sadness"#, Energy::Medium),
            track("sad_2", r#"Comforting Melodies for Sadness"#, "https://www.youtube.com/watch?v=bP8R0iYQqjE", r#"Soft, comforting music for moments of sadness"#, Energy::Low),
            track("sad_3", r#"Hope and Healing Playlist"#, "https://www.youtube.com/watch?v=1ZYbU82GVz4", r#"Music that brings comfort and hope during sad times"#, Energy::MediumLow),
            track("sad_4", r#"Gentle Uplift - Mood Transition"#, "https://www.youtube.com/watch?v=4N0-kB-gbDE", r#"Soft instrumental music to gently lift your spirits"#, Energy::Low),
        ],
    );
    music.insert(
        "lonely".to_string(),
        vec![
            track("lonely_1", r#"Comforting Music for Loneliness"#, "https://www.youtube.com/watch?v=bP8R0iYQqjE", r#"Gentle, comforting melodies for moments of loneliness"#, Energy::Low),
            track("lonely_2", r#"You're Not Alone - Comfort Playlist"#, "https://www.youtube.com/watch?v=1ZYbU82GVz4", r#"Soothing music to provide comfort during lonely moments"#, Energy::Low),
            track("lonely_3", r#"Gentle Company - Ambient Comfort"#, "https://www.youtube.com/watch?v=4N0-kB-gbDE", r#"Calming ambient music to ease feelings of loneliness"#, Energy::MediumLow),
            track("lonely_4", r#"Warm Embrace - Soothing Sounds"#, "https://www.youtube.com/watch?v=4pLVKx1kW-o", r#"Soft, warm music to comfort lonely feelings"#, Energy::VeryLow),
        ],
    );
    music.insert(
        "anxious".to_string(),
        vec![
            track("anxious_1", r#"Calm Music for Stress and Anxiety Relief"#, "https://www.youtube.com/watch?v=1ZYbU82GVz4", r#"Soothing ambient music to calm your nervous system"#, Energy::VeryLow),
            track("anxious_2", r#"Anxiety Relief Music - Immediate Calm"#, "https://www.youtube.com/watch?v=4pLVKx1kW-o", r#"Music specifically designed to reduce anxiety quickly"#, Energy::VeryLow),
            track("anxious_3", r#"Peaceful Piano for Relaxation"#, "https://www.youtube.com/watch?v=bP8R0iYQqjE", r#"Gentle piano melodies to quiet anxious thoughts"#, Energy::Low),
            track("anxious_4", r#"Grounding Music for Anxiety"#, "https://www.youtube.com/watch?v=WRz2MxhAdJo", r#"Stabilizing music to help ground anxious feelings"#, Energy::Low),
        ],
    );
    music.insert(
        "angry".to_string(),
        vec![
            track("angry_1", r#"Intense Music for Emotional Release"#, "https://www.youtube.com/watch?v=9bZkp7q19f0", r#"Powerful music to safely match and channel angry energy"#, Energy::High),
            track("angry_2", r#"Calming Music for Anger Management"#, "https://www.youtube.com/watch?v=1ZYbU82GVz4", r#"Soothing sounds to help calm and regulate anger"#, Energy::Low),
            track("angry_3", r#"Grounding Music for Emotional Regulation"#, "https://www.youtube.com/watch?v=4N0-kB-gbDE", r#"Focus-oriented music to help center and ground angry feelings"#, Energy::Medium),
            track("angry_4", r#"Release and Reset - Anger Channeling"#, "https://www.youtube.com/watch?v=SEfs5TJZ6Nk", r#"Music to help release and transform angry energy"#, Energy::MediumHigh),
        ],
    );
    music.insert(
        "tired".to_string(),
        vec![
            track("tired_1", r#"Relaxing Music for Exhaustion"#, "https://www.youtube.com/watch?v=1ZYbU82GVz4", r#"Gentle music to support rest and recovery when tired"#, Energy::VeryLow),
            track("tired_2", r#"Sleep Music - Deep Rest"#, "https://www.youtube.com/watch?v=4pLVKx1kW-o", r#"Restorative music for when you need deep rest"#, Energy::VeryLow),
            track("tired_3", r#"Gentle Uplift for Low Energy"#, "https://www.youtube.com/watch?v=W6YI3ZFOL0A", r#"Soft uplifting music for gentle energy restoration"#, Energy::Low),
            track("tired_4", r#"Restorative Ambient Sounds"#, "https://www.youtube.com/watch?v=bP8R0iYQqjE", r#"Calming sounds to support tired mind and body"#, Energy::VeryLow),
        ],
    );
    music.insert(
        "neutral".to_string(),
        vec![
            track("neutral_1", r#"Lofi Hip Hop Radio - Beats to Relax/Study"#, "https://www.youtube.com/watch?v=5qap5aO4i9A", r#"Balanced background music for neutral or focused states"#, Energy::Medium),
            track("neutral_2", r#"Focus Music for Concentration"#, "https://www.youtube.com/watch?v=4N0-kB-gbDE", r#"Music to enhance focus during neutral emotional states"#, Energy::Medium),
            track("neutral_3", r#"Ambient Study Music"#, "https://www.youtube.com/watch?v=WRz2MxhAdJo", r#"Neutral ambient music for calm productivity"#, Energy::MediumLow),
            track("neutral_4", r#"Calm Background Music"#, "https://www.youtube.com/watch?v=bP8R0iYQqjE", r#"Gentle background music for neutral moments"#, Energy::Low),
        ],
    );
    music.insert(
        "motivational".to_string(),
        vec![
            track("motivational_1", r#"Uplifting Music for Motivation"#, "https://www.youtube.com/watch?v=W6YI3ZFOL0A", r#"Gentle uplifting music to help boost motivation and energy"#, Energy::Medium),
            track("motivational_2", r#"Inspirational Music Mix"#, "https://www.youtube.com/watch?v=1ZYbU82GVz4", r#"Music to inspire and motivate you throughout the day"#, Energy::Medium),
            track("motivational_3", r#"Focus and Motivation Music"#, "https://www.youtube.com/watch?v=4N0-kB-gbDE", r#"Music to enhance focus and build motivational energy"#, Energy::Medium),
            track("motivational_4", r#"Energy Boost Motivation"#, "https://www.youtube.com/watch?v=bP8R0iYQqjE", r#"Uplifting sounds to boost your motivational energy"#, Energy::Medium),
        ],
    );
    music
}
