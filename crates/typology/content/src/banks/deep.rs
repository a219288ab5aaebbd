use typology_core::quiz::QuizQuestion;
use typology_core::systems::{InstinctRealm, Pole, Quadra};
use typology_core::{Aspect, CognitiveFunction, EnneagramType, Instinct, QuizBank, QuizStrategy};

use super::{pick, question, split};

/// Long questionnaire: narrow questions scored on functions, quadras and realms.
pub fn deep_bank() -> QuizBank {
    let mut bank = QuizBank::new(QuizStrategy::Deep);
    bank.attitudinal = attitudinal();
    bank.enneagram_types = enneagram_types();
    bank.enneagram_instincts = enneagram_instincts();
    bank.mbti_functions = mbti_functions();
    bank.socionics_quadras = socionics_quadras();
    bank.socionics_poles = socionics_poles();
    bank.instinct_realms = instinct_realms();
    bank
}

fn attitudinal() -> Vec<QuizQuestion<Aspect>> {
    use Aspect::*;
    vec![
        question(
            "ap-d1",
            "Someone dismisses your decision. You feel...",
            [
                pick("Determined to prove it right", Volition, 2),
                pick("Curious whether they have a point", Logic, 1),
                pick("Hurt, but it passes", Emotion, 1),
                pick("Mostly indifferent", Physics, 1),
            ],
        ),
        question(
            "ap-d2",
            "Which kind of advice do you ignore most easily?",
            [
                pick("How to feel about something", Emotion, -1),
                pick("How to take care of your body", Physics, -1),
                pick("How to structure an argument", Logic, -1),
                pick("What you should want", Volition, -1),
            ],
        ),
        question(
            "ap-d3",
            "You are confident in your ability to...",
            [
                pick("Set a direction and hold it", Volition, 2),
                pick("Reason through a problem", Logic, 2),
                pick("Read and express a mood", Emotion, 2),
                pick("Handle the material world", Physics, 2),
            ],
        ),
        question(
            "ap-d4",
            "What do you quietly need others to provide?",
            [
                pick("Clear leadership", Volition, -1),
                pick("Solid explanations", Logic, -1),
                pick("Warmth and reassurance", Emotion, -1),
                pick("Comfort and practical care", Physics, -1),
            ],
        ),
        question(
            "ap-d5",
            "In a heated meeting you...",
            [
                split("Steer toward a decision", [(Volition, 2), (Logic, 1)]),
                split("Name the contradiction", [(Logic, 2), (Volition, 1)]),
                split("Defuse the tension", [(Emotion, 2), (Physics, 1)]),
                split("Suggest a break and some snacks", [(Physics, 2), (Emotion, 1)]),
            ],
        ),
        question(
            "ap-d6",
            "What feels most like your own territory?",
            [
                pick("My choices", Volition, 1),
                pick("My conclusions", Logic, 1),
                pick("My feelings", Emotion, 1),
                pick("My space and belongings", Physics, 1),
            ],
        ),
    ]
}

fn enneagram_types() -> Vec<QuizQuestion<EnneagramType>> {
    use EnneagramType::*;
    vec![
        question(
            "enn-d1",
            "Your inner critic mostly says...",
            [
                pick("That is not good enough", One, 2),
                pick("They do not really need you", Two, 2),
                pick("You are falling behind", Three, 2),
                pick("You are missing something others have", Four, 2),
                pick("You do not know enough yet", Five, 2),
                pick("Something will go wrong", Six, 2),
                pick("You are missing out", Seven, 2),
                pick("Do not let them see weakness", Eight, 2),
                pick("Why make a fuss?", Nine, 2),
            ],
        ),
        question(
            "enn-d2",
            "Your first reaction to a problem is...",
            [
                split("Act on it right away", [(Eight, 1), (One, 1), (Nine, 1)]),
                split("Check how people feel about it", [(Two, 1), (Three, 1), (Four, 1)]),
                split("Think it through first", [(Five, 1), (Six, 1), (Seven, 1)]),
            ],
        ),
        question(
            "enn-d3",
            "At your best you are...",
            [
                pick("Principled and fair", One, 2),
                pick("Generous and caring", Two, 2),
                pick("Driven and inspiring", Three, 2),
                pick("Authentic and creative", Four, 2),
                pick("Insightful and precise", Five, 2),
                pick("Loyal and prepared", Six, 2),
                pick("Joyful and versatile", Seven, 2),
                pick("Strong and protective", Eight, 2),
                pick("Steady and accepting", Nine, 2),
            ],
        ),
        question(
            "enn-d4",
            "When you are stressed, people see you become...",
            [
                split("Moody and withdrawn", [(One, 1), (Seven, 1), (Four, 1)]),
                split("Controlling or aggressive", [(Two, 1), (Five, 1)]),
                split("Anxious and checked out", [(Three, 1), (Nine, 1)]),
                split("Clingy or overworking", [(Four, 1), (Six, 1)]),
                split("Secretive and detached", [(Eight, 1), (Five, 1)]),
            ],
        ),
        question(
            "enn-d5",
            "You would rather be...",
            [
                split("Right than liked", [(One, 1), (Five, 1), (Eight, 1)]),
                split("Liked than right", [(Two, 1), (Nine, 1), (Seven, 1)]),
                split("Admired than understood", [(Three, 2)]),
                split("Understood than admired", [(Four, 2), (Six, 1)]),
            ],
        ),
        question(
            "enn-d6",
            "What do you avoid at all costs?",
            [
                pick("Being corrupt", One, 2),
                pick("Being unloved", Two, 2),
                pick("Being worthless", Three, 2),
                pick("Being without identity", Four, 2),
                pick("Being helpless", Five, 2),
                pick("Being without support", Six, 2),
                pick("Being in pain", Seven, 2),
                pick("Being controlled", Eight, 2),
                pick("Being in conflict", Nine, 2),
            ],
        ),
    ]
}

fn enneagram_instincts() -> Vec<QuizQuestion<Instinct>> {
    use Instinct::*;
    vec![
        question(
            "enn-inst-d1",
            "You spend most of your energy on...",
            [
                pick("Health, money and home", SelfPreservation, 2),
                pick("Reputation and community", Social, 2),
                pick("Chemistry and intensity", Sexual, 2),
            ],
        ),
        question(
            "enn-inst-d2",
            "What do you neglect?",
            [
                split("Your own basic needs", [(Social, 1), (Sexual, 1)]),
                split("Groups and networks", [(SelfPreservation, 1), (Sexual, 1)]),
                split("One-on-one depth", [(SelfPreservation, 1), (Social, 1)]),
            ],
        ),
        question(
            "enn-inst-d3",
            "A good evening is...",
            [
                pick("A quiet night with everything in order", SelfPreservation, 1),
                pick("A party where you know everyone", Social, 1),
                pick("A deep talk until dawn", Sexual, 1),
            ],
        ),
    ]
}

fn mbti_functions() -> Vec<QuizQuestion<CognitiveFunction>> {
    use CognitiveFunction::*;
    vec![
        question(
            "mbti-d1",
            "New information is most exciting when it...",
            [
                pick("Sparks a dozen new ideas", Ne, 2),
                pick("Clicks into a single insight", Ni, 2),
                pick("Can be tried out right now", Se, 2),
                pick("Connects to what you already know", Si, 2),
            ],
        ),
        question(
            "mbti-d2",
            "You judge a plan by whether it...",
            [
                pick("Gets results efficiently", Te, 2),
                pick("Is internally consistent", Ti, 2),
                pick("Keeps everyone on board", Fe, 2),
                pick("Matches your values", Fi, 2),
            ],
        ),
        question(
            "mbti-d3",
            "Which comes most naturally?",
            [
                split("Organizing people and resources", [(Te, 2), (Si, 1)]),
                split("Building a precise model", [(Ti, 2), (Ne, 1)]),
                split("Reading the room", [(Fe, 2), (Ni, 1)]),
                split("Knowing what you stand for", [(Fi, 2), (Se, 1)]),
            ],
        ),
        question(
            "mbti-d4",
            "What drains you fastest?",
            [
                pick("Repetitive routine", Ne, 1),
                pick("Being rushed into a decision", Ni, 1),
                pick("Sitting still with nothing to do", Se, 1),
                pick("Sudden change of plans", Si, 1),
            ],
        ),
        question(
            "mbti-d5",
            "Under stress you fall back on...",
            [
                split("Forcing order on things", [(Te, 1), (Ni, 1)]),
                split("Picking things apart", [(Ti, 1), (Se, 1)]),
                split("Pleasing everyone", [(Fe, 1), (Si, 1)]),
                split("Retreating into your feelings", [(Fi, 1), (Ne, 1)]),
            ],
        ),
        question(
            "mbti-d6",
            "Your friends would call you...",
            [
                pick("The visionary", Ni, 2),
                pick("The brainstormer", Ne, 2),
                pick("The thrill-seeker", Se, 2),
                pick("The reliable one", Si, 2),
                pick("The organizer", Te, 2),
                pick("The analyst", Ti, 2),
                pick("The host", Fe, 2),
                pick("The idealist", Fi, 2),
            ],
        ),
    ]
}

fn socionics_quadras() -> Vec<QuizQuestion<Quadra>> {
    use Quadra::*;
    vec![
        question(
            "soc-q1",
            "The atmosphere you enjoy most is...",
            [
                pick("Light, playful and full of ideas", Alpha, 2),
                pick("Intense, loyal and hierarchical", Beta, 2),
                pick("Frank, ambitious and pragmatic", Gamma, 2),
                pick("Calm, productive and sincere", Delta, 2),
            ],
        ),
        question(
            "soc-q2",
            "A group earns your trust when it...",
            [
                pick("Welcomes everyone's theories", Alpha, 1),
                pick("Stands together under pressure", Beta, 1),
                pick("Rewards results and honesty", Gamma, 1),
                pick("Lets each person do good work", Delta, 1),
            ],
        ),
        question(
            "soc-q3",
            "Which value matters most?",
            [
                split("Openness", [(Alpha, 2), (Delta, 1)]),
                split("Commitment", [(Beta, 2), (Alpha, 1)]),
                split("Independence", [(Gamma, 2), (Beta, 1)]),
                split("Wellbeing", [(Delta, 2), (Gamma, 1)]),
            ],
        ),
    ]
}

fn socionics_poles() -> Vec<QuizQuestion<Pole>> {
    vec![
        question(
            "soc-d-ei",
            "You notice first...",
            [
                pick("What an object is and what it does", Pole::E, 2),
                pick("How things relate to each other", Pole::I, 2),
            ],
        ),
        question(
            "soc-d-jp",
            "Your workday is...",
            [
                pick("Evenly paced and planned", Pole::J, 2),
                pick("Driven by inspiration and timing", Pole::P, 2),
            ],
        ),
    ]
}

fn instinct_realms() -> Vec<QuizQuestion<InstinctRealm>> {
    use InstinctRealm::*;
    vec![
        question(
            "xi-d1",
            "What do you protect first?",
            [
                pick("My endurance", Fortitude, 2),
                pick("My resources", Security, 2),
                pick("My discipline", SelfMastery, 2),
            ],
        ),
        question(
            "xi-d2",
            "What do you seek in others?",
            [
                pick("A partner in arms", Allyship, 2),
                pick("A fair share of the work", Cooperation, 2),
                pick("A place to belong", Belonging, 2),
            ],
        ),
        question(
            "xi-d3",
            "What gives your life direction?",
            [
                pick("Making a difference", Significance, 2),
                pick("Discovering the unknown", Exploration, 2),
                pick("Being part of something greater", Union, 2),
            ],
        ),
        question(
            "xi-d4",
            "Which loss would hurt most?",
            [
                split("My health", [(Fortitude, 2), (SelfMastery, 1)]),
                split("My home", [(Security, 2), (Belonging, 1)]),
                split("My closest ally", [(Allyship, 2), (Union, 1)]),
                split("My team", [(Cooperation, 2), (Belonging, 1)]),
                split("My legacy", [(Significance, 2), (SelfMastery, 1)]),
                split("My freedom to roam", [(Exploration, 2), (Fortitude, 1)]),
            ],
        ),
        question(
            "xi-d5",
            "You recover from setbacks by...",
            [
                pick("Toughing it out", Fortitude, 1),
                pick("Restoring order at home", Security, 1),
                pick("Training harder", SelfMastery, 1),
                pick("Leaning on a friend", Allyship, 1),
                pick("Getting back to shared work", Cooperation, 1),
                pick("Returning to my people", Belonging, 1),
                pick("Remembering why it matters", Significance, 1),
                pick("Going somewhere new", Exploration, 1),
                pick("Letting go into something bigger", Union, 1),
            ],
        ),
    ]
}
