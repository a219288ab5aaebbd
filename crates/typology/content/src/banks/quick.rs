use typology_core::systems::{InstinctCenter, InstinctRealm, Pole};
use typology_core::{Aspect, EnneagramType, Instinct, QuizBank, QuizStrategy};

use super::{pick, question, split};

/// Short questionnaire: broad questions scored on poles and centers.
pub fn quick_bank() -> QuizBank {
    use Aspect::*;
    use EnneagramType::*;

    let mut bank = QuizBank::new(QuizStrategy::Quick);

    bank.attitudinal = vec![
        question(
            "ap-1",
            "A group project stalls. What do you do first?",
            [
                pick("Take the lead and assign tasks", Volition, 2),
                pick("Find the flaw in the plan", Logic, 2),
                pick("Lift everyone's spirits", Emotion, 2),
                pick("Order food and set up the room", Physics, 2),
            ],
        ),
        question(
            "ap-2",
            "Which criticism stings least?",
            [
                pick("You are too stubborn", Volition, 1),
                pick("You overthink things", Logic, 1),
                pick("You are too dramatic", Emotion, 1),
                pick("You care too much about comfort", Physics, 1),
            ],
        ),
        question(
            "ap-3",
            "A perfect day off is...",
            [
                split("A hike with a goal at the summit", [(Physics, 1), (Volition, 1)]),
                split("A long debate over dinner", [(Logic, 1), (Emotion, 1)]),
                split("A museum, alone, at my own pace", [(Logic, 1), (Volition, 1)]),
                split("Cooking for friends", [(Physics, 1), (Emotion, 1)]),
            ],
        ),
        question(
            "ap-4",
            "People come to you for...",
            [
                pick("Decisions", Volition, 2),
                pick("Explanations", Logic, 2),
                pick("Encouragement", Emotion, 2),
                pick("Practical help", Physics, 2),
            ],
        ),
    ];

    bank.enneagram_types = vec![
        question(
            "enn-1",
            "Under pressure you worry most about...",
            [
                split("Being wrong or careless", [(One, 2), (Six, 1)]),
                split("Being unwanted or a failure", [(Two, 1), (Three, 2)]),
                split("Being ordinary or incompetent", [(Four, 2), (Five, 1)]),
                split("Being trapped or controlled", [(Seven, 1), (Eight, 2)]),
                pick("Conflict breaking the peace", Nine, 2),
            ],
        ),
        question(
            "enn-2",
            "What do you reach for when things fall apart?",
            [
                pick("A clear standard to hold to", One, 2),
                pick("Someone who needs me", Two, 2),
                pick("A win to prove myself", Three, 2),
                pick("A feeling that is truly mine", Four, 2),
                pick("Time alone to understand it", Five, 2),
                pick("A plan for every outcome", Six, 2),
                pick("The next exciting thing", Seven, 2),
                pick("Control of the situation", Eight, 2),
                pick("Something calm and familiar", Nine, 2),
            ],
        ),
        question(
            "enn-3",
            "Your anger usually...",
            [
                split("Comes out as blunt force", [(Eight, 2), (Seven, 1)]),
                split("Turns into quiet resentment", [(One, 1), (Nine, 2)]),
                split("Gets swallowed to keep the mood", [(Two, 2), (Three, 1)]),
                split("Withdraws into my head", [(Five, 2), (Four, 1)]),
                pick("Jumps between doubt and defiance", Six, 2),
            ],
        ),
    ];

    bank.enneagram_instincts = vec![
        question(
            "enn-inst-1",
            "Entering a new place, you notice first...",
            [
                pick("Where the exits, food and seats are", Instinct::SelfPreservation, 2),
                pick("Who is in charge and who knows whom", Instinct::Social, 2),
                pick("The one person who draws you in", Instinct::Sexual, 2),
            ],
        ),
        question(
            "enn-inst-2",
            "What would you least like to lose?",
            [
                pick("My security and routines", Instinct::SelfPreservation, 1),
                pick("My place in the community", Instinct::Social, 1),
                pick("My most intense connection", Instinct::Sexual, 1),
            ],
        ),
    ];

    bank.mbti_poles = vec![
        question(
            "mbti-ei",
            "After a busy week you recharge by...",
            [
                pick("Going out with people", Pole::E, 2),
                pick("Staying in alone", Pole::I, 2),
            ],
        ),
        question(
            "mbti-sn",
            "You trust more...",
            [
                pick("What you can see and verify", Pole::S, 2),
                pick("Patterns and possibilities", Pole::N, 2),
            ],
        ),
        question(
            "mbti-tf",
            "A hard decision is settled by...",
            [
                pick("The most logical outcome", Pole::T, 2),
                pick("Who it affects and how", Pole::F, 2),
            ],
        ),
        question(
            "mbti-jp",
            "Plans are...",
            [
                pick("Made early and kept", Pole::J, 2),
                pick("Loose and open to change", Pole::P, 2),
            ],
        ),
    ];

    bank.socionics_poles = vec![
        question(
            "soc-ei",
            "Your energy flows toward...",
            [
                pick("Objects and events out there", Pole::E, 2),
                pick("Relationships between things", Pole::I, 2),
            ],
        ),
        question(
            "soc-sn",
            "You are better at...",
            [
                pick("Handling the present moment", Pole::S, 2),
                pick("Sensing where things are heading", Pole::N, 2),
            ],
        ),
        question(
            "soc-tf",
            "In a team you manage...",
            [
                pick("Facts, methods and efficiency", Pole::T, 2),
                pick("Mood, trust and morale", Pole::F, 2),
            ],
        ),
        question(
            "soc-jp",
            "You work best...",
            [
                pick("On a steady, planned rhythm", Pole::J, 2),
                pick("In bursts when the moment feels right", Pole::P, 2),
            ],
        ),
    ];

    bank.instinct_centers = vec![
        question(
            "xi-center-1",
            "What keeps you up at night?",
            [
                pick("Whether I can take care of myself", InstinctCenter::Survival, 2),
                pick("Whether I am close to the right people", InstinctCenter::Interpersonal, 2),
                pick("Whether my life means something", InstinctCenter::Purpose, 2),
            ],
        ),
        question(
            "xi-center-2",
            "You feel most alive when...",
            [
                pick("I am strong and prepared", InstinctCenter::Survival, 1),
                pick("I belong somewhere", InstinctCenter::Interpersonal, 1),
                pick("I am chasing something bigger", InstinctCenter::Purpose, 1),
            ],
        ),
    ];

    bank.instinct_realms = vec![
        question(
            "xi-realm-1",
            "Which describes you best?",
            [
                pick("I endure what others cannot", InstinctRealm::Fortitude, 2),
                pick("I make sure we are safe", InstinctRealm::Security, 2),
                pick("I master myself before anything else", InstinctRealm::SelfMastery, 2),
                pick("I stand by my allies", InstinctRealm::Allyship, 2),
                pick("I make people work together", InstinctRealm::Cooperation, 2),
                pick("I need to be part of something", InstinctRealm::Belonging, 2),
                pick("I want to leave a mark", InstinctRealm::Significance, 2),
                pick("I need to see what is out there", InstinctRealm::Exploration, 2),
                pick("I seek to merge with something greater", InstinctRealm::Union, 2),
            ],
        ),
        question(
            "xi-realm-2",
            "In a crisis you...",
            [
                split(
                    "Hold the line and protect what is ours",
                    [(InstinctRealm::Fortitude, 1), (InstinctRealm::Security, 1)],
                ),
                split(
                    "Rally people and split the work",
                    [(InstinctRealm::Cooperation, 1), (InstinctRealm::Allyship, 1)],
                ),
                split(
                    "Look for the meaning in it",
                    [(InstinctRealm::Significance, 1), (InstinctRealm::Union, 1)],
                ),
                split(
                    "Find a way out nobody has tried",
                    [(InstinctRealm::Exploration, 1), (InstinctRealm::SelfMastery, 1)],
                ),
            ],
        ),
    ];

    bank
}
