//! Built-in English and Spanish text tables.

pub(super) const ENGLISH: &[(&str, &str)] = &[
    ("instruction.1", "Brisk 5-min warmup walk. Then alternate 60 sec jogging and 90 sec walking for 20 min."),
    ("instruction.2", "Brisk 5-min warmup walk. Then alternate 90 sec jogging and 2 min walking for 21 min."),
    ("instruction.3", "Brisk 5-min warmup walk. Jog 90 sec, walk 90 sec, jog 3 min, walk 3 min, then repeat once."),
    ("instruction.4", "Brisk 5-min warmup walk. Jog 3 min, walk 90 sec, jog 5 min, walk 2.5 min, jog 3 min, walk 90 sec, jog 5 min."),
    ("instruction.5", "Brisk 5-min warmup walk. Jog 5 min, walk 3 min, jog 5 min, walk 3 min, jog 5 min."),
    ("instruction.6", "Brisk 5-min warmup walk. Jog 8 min, walk 5 min, jog 8 min."),
    ("instruction.7", "Brisk 5-min warmup walk. Jog 25 min without stopping."),
    ("instruction.8", "Brisk 5-min warmup walk. Jog 28 min without stopping."),
    ("instruction.9", "Brisk 5-min warmup walk. Jog 30 min without stopping."),
    ("instruction.10", "Brisk 5-min warmup walk. Jog 30 min without stopping. You did it!"),
    ("tip.1", "Remember to stretch before and after your workout!"),
    ("tip.2", "Wear comfortable shoes and clothing."),
    ("tip.3", "Stay hydrated and listen to your body."),
    ("tip.4", "Rest is as important as running. Take it easy on rest days!"),
    ("tip.5", "Track your progress and celebrate small wins."),
    ("tip.6", "Invite a friend or family member to join you!"),
    ("tip.7", "If you feel pain, stop and consult a professional."),
    ("tip.8", "Set a reminder so you don't miss your session."),
    ("tip.9", "Smile and enjoy the journey!"),
    ("tip.10", "You're doing great, keep going!"),
    ("rest.instruction", "Rest day. Recover, hydrate and stretch."),
    ("note.hydration", "Hydrate before and after. Stop and consult a professional if you feel pain or dizziness."),
    ("note.reduced", "Session shortened for safety."),
    ("label.title", "Couch to 5K Plan"),
    ("label.name", "Name"),
    ("label.start_date", "Start date"),
    ("label.goal", "Personal goal"),
    ("label.week", "Week"),
    ("label.day", "Day"),
    ("label.rest_day", "Rest day"),
    ("label.run", "run"),
    ("label.walk", "walk"),
    ("label.warm_up", "Warm-up"),
    ("label.notes", "Notes"),
    ("label.resources", "Resources: NHS Couch to 5K (https://www.nhs.uk/live-well/exercise/couch-to-5k-week-by-week/), CDC Physical Activity Guidelines (https://www.cdc.gov/physicalactivity/basics/index.htm)"),
    ("label.disclaimer", "This plan is for information only and is not a substitute for professional medical advice. Consult your healthcare provider before starting any new exercise program."),
    ("voice.intro", "Time for your Couch to 5K session."),
    ("voice.outro", "Great work. Cool down with a gentle walk and stretch."),
];

pub(super) const SPANISH: &[(&str, &str)] = &[
    ("instruction.1", "Camine rápido 5 min para calentar. Luego alterne 60 seg corriendo y 90 seg caminando durante 20 min."),
    ("instruction.2", "Camine rápido 5 min para calentar. Luego alterne 90 seg corriendo y 2 min caminando durante 21 min."),
    ("instruction.3", "Camine rápido 5 min para calentar. Corra 90 seg, camine 90 seg, corra 3 min, camine 3 min y repita una vez."),
    ("instruction.4", "Camine rápido 5 min para calentar. Corra 3 min, camine 90 seg, corra 5 min, camine 2.5 min, corra 3 min, camine 90 seg, corra 5 min."),
    ("instruction.5", "Camine rápido 5 min para calentar. Corra 5 min, camine 3 min, corra 5 min, camine 3 min, corra 5 min."),
    ("instruction.6", "Camine rápido 5 min para calentar. Corra 8 min, camine 5 min, corra 8 min."),
    ("instruction.7", "Camine rápido 5 min para calentar. Corra 25 min sin parar."),
    ("instruction.8", "Camine rápido 5 min para calentar. Corra 28 min sin parar."),
    ("instruction.9", "Camine rápido 5 min para calentar. Corra 30 min sin parar."),
    ("instruction.10", "Camine rápido 5 min para calentar. Corra 30 min sin parar. ¡Lo lograste!"),
    ("tip.1", "¡Recuerda estirar antes y después de tu entrenamiento!"),
    ("tip.2", "Usa calzado y ropa cómodos."),
    ("tip.3", "Mantente hidratado y escucha a tu cuerpo."),
    ("tip.4", "El descanso es tan importante como correr. ¡Tómalo con calma en los días de descanso!"),
    ("tip.5", "Registra tu progreso y celebra los pequeños logros."),
    ("tip.6", "¡Invita a un amigo o familiar a unirse!"),
    ("tip.7", "Si sientes dolor, detente y consulta a un profesional."),
    ("tip.8", "Pon una alarma para no perder tu sesión."),
    ("tip.9", "¡Sonríe y disfruta el proceso!"),
    ("tip.10", "¡Lo estás haciendo genial, sigue así!"),
    ("rest.instruction", "Día de descanso. Recupérate, hidrátate y estira."),
    ("note.hydration", "Hidrátate antes y después. Detente y consulta a un profesional si sientes dolor o mareo."),
    ("note.reduced", "Sesión acortada por seguridad."),
    ("label.title", "Plan Couch to 5K"),
    ("label.name", "Nombre"),
    ("label.start_date", "Fecha de inicio"),
    ("label.goal", "Meta personal"),
    ("label.week", "Semana"),
    ("label.day", "Día"),
    ("label.rest_day", "Día de descanso"),
    ("label.run", "correr"),
    ("label.walk", "caminar"),
    ("label.warm_up", "Calentamiento"),
    ("label.notes", "Notas"),
    ("label.resources", "Recursos: NHS Couch to 5K (https://www.nhs.uk/live-well/exercise/couch-to-5k-week-by-week/), Guías de actividad física de los CDC (https://www.cdc.gov/physicalactivity/basics/index.htm)"),
    ("label.disclaimer", "Este plan es solo informativo y no sustituye el consejo médico profesional. Consulte a su médico antes de comenzar cualquier programa de ejercicio."),
    ("voice.intro", "Es hora de tu sesión de Couch to 5K."),
    ("voice.outro", "Buen trabajo. Enfría con una caminata suave y estira."),
];
