//! Static interface strings. Placeholders look like `{name}` and are filled with [`fill`].

use generation::Language;

#[derive(Debug)]
pub struct Translations {
    pub tagline: &'static str,
    pub generation_error: &'static str,
    pub storage_error: &'static str,
    pub retry_prompt: &'static str,
    pub back_to_menu: &'static str,
    pub loading: &'static str,
    pub progress: &'static str,
    pub score: &'static str,
    pub navigation: &'static str,
    pub unknown_command: &'static str,

    pub menu_title: &'static str,
    pub learning_language_label: &'static str,
    pub ui_language_label: &'static str,
    pub level_label: &'static str,
    pub category_label: &'static str,
    pub mode_label: &'static str,
    pub length_label: &'static str,
    pub not_startable: &'static str,

    pub image_not_available: &'static str,
    pub image_saved: &'static str,
    pub loading_image: &'static str,

    pub translate_prompt: &'static str,
    pub hint: &'static str,
    pub hint_error: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub example_sentence: &'static str,
    pub continue_prompt: &'static str,

    pub grammar_rule: &'static str,
    pub rule_not_available: &'static str,
    pub choose_option: &'static str,
    pub option_not_understood: &'static str,
    pub getting_explanation: &'static str,
    pub explanation_error: &'static str,
    pub correct_answer_was: &'static str,

    pub pronunciation_instruction: &'static str,
    pub pronunciation_controls: &'static str,
    pub speak_now: &'static str,
    pub you_said: &'static str,
    pub correct_word_was: &'static str,
    pub mic_error: &'static str,
    pub recognition_error: &'static str,
    pub speech_unsupported: &'static str,

    pub results_title: &'static str,
    pub final_score: &'static str,
    pub perfect_message: &'static str,
    pub excellent_message: &'static str,
    pub good_message: &'static str,
    pub practice_message: &'static str,
}

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Ja => &JA,
        Language::Zh => &ZH,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Es => &ES,
        Language::It => &IT,
        Language::Ar => &AR,
    }
}

/// Replaces every `{name}` in `template` with its value.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_owned(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

static EN: Translations = Translations {
    tagline: "Learn {language} with lessons generated just for you.",
    generation_error: "Sorry, something went wrong while generating content. Please try again.",
    storage_error: "Could not read or save your word history.",
    retry_prompt: "Try again? (Y/n): ",
    back_to_menu: "Back to menu",
    loading: "Generating your lesson...",
    progress: "{current} / {total}",
    score: "Score: {score}",
    navigation: "[n]ext  [p]revious  [m]enu",
    unknown_command: "Unknown command.",

    menu_title: "Choose what to practice",
    learning_language_label: "I want to learn",
    ui_language_label: "My app is in",
    level_label: "Level",
    category_label: "Category",
    mode_label: "Mode",
    length_label: "Quiz length",
    not_startable: "Pick a category and a mode first.",

    image_not_available: "Image not available",
    image_saved: "Picture: {path}",
    loading_image: "Drawing a picture...",

    translate_prompt: "Translate into {language} (? for a hint): ",
    hint: "Hint: {hint}",
    hint_error: "Could not get a hint right now.",
    correct: "Correct!",
    incorrect: "Not quite. The correct answer is {answer}.",
    example_sentence: "Example:",
    continue_prompt: "Press Enter to continue",

    grammar_rule: "Grammar rule: {rule}",
    rule_not_available: "Grammar rule not available ([r] to retry)",
    choose_option: "Your answer (number or text, :s to skip): ",
    option_not_understood: "Couldn't understand your answer, please try again.",
    getting_explanation: "Getting an explanation...",
    explanation_error: "Could not load an explanation.",
    correct_answer_was: "The correct answer was {answer}.",

    pronunciation_instruction: "Say this word aloud:",
    pronunciation_controls: "[l]isten  [r]ecord  [m]enu",
    speak_now: "Speak now...",
    you_said: "You said: {transcript}",
    correct_word_was: "The word was {word}.",
    mic_error: "Microphone access was denied. Allow it in your system settings.",
    recognition_error: "Speech recognition failed. Please try again.",
    speech_unsupported: "Speech is not available on this system.",

    results_title: "Session complete!",
    final_score: "You scored {score} out of {total} ({percentage}%)",
    perfect_message: "Perfect score! Outstanding work!",
    excellent_message: "Excellent! You really know your stuff.",
    good_message: "Good job! Keep practicing.",
    practice_message: "Keep practicing, you'll get there!",
};

static DE: Translations = Translations {
    tagline: "Lerne {language} mit Lektionen, die nur für dich erstellt werden.",
    generation_error: "Beim Erstellen der Inhalte ist ein Fehler aufgetreten. Bitte versuche es erneut.",
    storage_error: "Dein Wortverlauf konnte nicht gelesen oder gespeichert werden.",
    retry_prompt: "Erneut versuchen? (J/n): ",
    back_to_menu: "Zurück zum Menü",
    loading: "Deine Lektion wird erstellt...",
    progress: "{current} / {total}",
    score: "Punkte: {score}",
    navigation: "[n]ächstes  [p] zurück  [m]enü",
    unknown_command: "Unbekannter Befehl.",

    menu_title: "Wähle, was du üben möchtest",
    learning_language_label: "Ich möchte lernen",
    ui_language_label: "Meine App ist auf",
    level_label: "Niveau",
    category_label: "Kategorie",
    mode_label: "Modus",
    length_label: "Quizlänge",
    not_startable: "Wähle zuerst eine Kategorie und einen Modus.",

    image_not_available: "Kein Bild verfügbar",
    image_saved: "Bild: {path}",
    loading_image: "Bild wird gezeichnet...",

    translate_prompt: "Übersetze ins {language} (? für einen Tipp): ",
    hint: "Tipp: {hint}",
    hint_error: "Gerade ist kein Tipp verfügbar.",
    correct: "Richtig!",
    incorrect: "Nicht ganz. Die richtige Antwort ist {answer}.",
    example_sentence: "Beispiel:",
    continue_prompt: "Weiter mit Enter",

    grammar_rule: "Grammatikregel: {rule}",
    rule_not_available: "Keine Grammatikregel verfügbar ([r] erneut versuchen)",
    choose_option: "Deine Antwort (Nummer oder Text, :s zum Überspringen): ",
    option_not_understood: "Antwort nicht verstanden, bitte versuche es noch einmal.",
    getting_explanation: "Erklärung wird geladen...",
    explanation_error: "Die Erklärung konnte nicht geladen werden.",
    correct_answer_was: "Die richtige Antwort war {answer}.",

    pronunciation_instruction: "Sprich dieses Wort laut aus:",
    pronunciation_controls: "[l] anhören  [r] aufnehmen  [m]enü",
    speak_now: "Jetzt sprechen...",
    you_said: "Du hast gesagt: {transcript}",
    correct_word_was: "Das Wort war {word}.",
    mic_error: "Der Zugriff auf das Mikrofon wurde verweigert. Erlaube ihn in den Systemeinstellungen.",
    recognition_error: "Spracherkennung fehlgeschlagen. Bitte versuche es erneut.",
    speech_unsupported: "Sprachfunktionen sind auf diesem System nicht verfügbar.",

    results_title: "Sitzung beendet!",
    final_score: "Du hast {score} von {total} Punkten erreicht ({percentage}%)",
    perfect_message: "Volle Punktzahl! Hervorragend!",
    excellent_message: "Ausgezeichnet! Du kennst dich wirklich aus.",
    good_message: "Gut gemacht! Übe weiter.",
    practice_message: "Weiter üben, du schaffst das!",
};

static FR: Translations = Translations {
    tagline: "Apprenez le {language} avec des leçons créées pour vous.",
    generation_error: "Désolé, une erreur est survenue lors de la génération du contenu. Veuillez réessayer.",
    storage_error: "Impossible de lire ou d'enregistrer ton historique de mots.",
    retry_prompt: "Réessayer ? (O/n) : ",
    back_to_menu: "Retour au menu",
    loading: "Création de votre leçon...",
    progress: "{current} / {total}",
    score: "Score : {score}",
    navigation: "[n] suivant  [p] précédent  [m]enu",
    unknown_command: "Commande inconnue.",

    menu_title: "Choisissez quoi pratiquer",
    learning_language_label: "Je veux apprendre",
    ui_language_label: "Mon application est en",
    level_label: "Niveau",
    category_label: "Catégorie",
    mode_label: "Mode",
    length_label: "Longueur du quiz",
    not_startable: "Choisissez d'abord une catégorie et un mode.",

    image_not_available: "Image non disponible",
    image_saved: "Image : {path}",
    loading_image: "Création d'une image...",

    translate_prompt: "Traduisez en {language} (? pour un indice) : ",
    hint: "Indice : {hint}",
    hint_error: "Impossible d'obtenir un indice pour le moment.",
    correct: "Correct !",
    incorrect: "Pas tout à fait. La bonne réponse est {answer}.",
    example_sentence: "Exemple :",
    continue_prompt: "Appuyez sur Entrée pour continuer",

    grammar_rule: "Règle de grammaire : {rule}",
    rule_not_available: "Règle de grammaire non disponible ([r] pour réessayer)",
    choose_option: "Votre réponse (numéro ou texte, :s pour passer) : ",
    option_not_understood: "Réponse non comprise, veuillez réessayer.",
    getting_explanation: "Chargement de l'explication...",
    explanation_error: "Impossible de charger l'explication.",
    correct_answer_was: "La bonne réponse était {answer}.",

    pronunciation_instruction: "Prononcez ce mot à voix haute :",
    pronunciation_controls: "[l] écouter  [r] enregistrer  [m]enu",
    speak_now: "Parlez maintenant...",
    you_said: "Vous avez dit : {transcript}",
    correct_word_was: "Le mot était {word}.",
    mic_error: "L'accès au microphone a été refusé. Autorisez-le dans les réglages du système.",
    recognition_error: "La reconnaissance vocale a échoué. Veuillez réessayer.",
    speech_unsupported: "La parole n'est pas disponible sur ce système.",

    results_title: "Session terminée !",
    final_score: "Vous avez obtenu {score} sur {total} ({percentage} %)",
    perfect_message: "Score parfait ! Travail remarquable !",
    excellent_message: "Excellent ! Vous maîtrisez le sujet.",
    good_message: "Bon travail ! Continuez à pratiquer.",
    practice_message: "Continuez à pratiquer, vous y arriverez !",
};

static ES: Translations = Translations {
    tagline: "Aprende {language} con lecciones creadas solo para ti.",
    generation_error: "Lo sentimos, algo salió mal al generar el contenido. Inténtalo de nuevo.",
    storage_error: "No se pudo leer ni guardar tu historial de palabras.",
    retry_prompt: "¿Intentar de nuevo? (S/n): ",
    back_to_menu: "Volver al menú",
    loading: "Generando tu lección...",
    progress: "{current} / {total}",
    score: "Puntuación: {score}",
    navigation: "[n] siguiente  [p] anterior  [m]enú",
    unknown_command: "Comando desconocido.",

    menu_title: "Elige qué practicar",
    learning_language_label: "Quiero aprender",
    ui_language_label: "Mi aplicación está en",
    level_label: "Nivel",
    category_label: "Categoría",
    mode_label: "Modo",
    length_label: "Longitud del cuestionario",
    not_startable: "Elige primero una categoría y un modo.",

    image_not_available: "Imagen no disponible",
    image_saved: "Imagen: {path}",
    loading_image: "Dibujando una imagen...",

    translate_prompt: "Traduce al {language} (? para una pista): ",
    hint: "Pista: {hint}",
    hint_error: "No se pudo obtener una pista ahora.",
    correct: "¡Correcto!",
    incorrect: "Casi. La respuesta correcta es {answer}.",
    example_sentence: "Ejemplo:",
    continue_prompt: "Pulsa Enter para continuar",

    grammar_rule: "Regla gramatical: {rule}",
    rule_not_available: "Regla gramatical no disponible ([r] para reintentar)",
    choose_option: "Tu respuesta (número o texto, :s para saltar): ",
    option_not_understood: "No se entendió tu respuesta, inténtalo de nuevo.",
    getting_explanation: "Obteniendo una explicación...",
    explanation_error: "No se pudo cargar la explicación.",
    correct_answer_was: "La respuesta correcta era {answer}.",

    pronunciation_instruction: "Di esta palabra en voz alta:",
    pronunciation_controls: "[l] escuchar  [r] grabar  [m]enú",
    speak_now: "Habla ahora...",
    you_said: "Dijiste: {transcript}",
    correct_word_was: "La palabra era {word}.",
    mic_error: "Se denegó el acceso al micrófono. Permítelo en la configuración del sistema.",
    recognition_error: "El reconocimiento de voz falló. Inténtalo de nuevo.",
    speech_unsupported: "La voz no está disponible en este sistema.",

    results_title: "¡Sesión completada!",
    final_score: "Obtuviste {score} de {total} ({percentage}%)",
    perfect_message: "¡Puntuación perfecta! ¡Trabajo excelente!",
    excellent_message: "¡Excelente! Realmente lo dominas.",
    good_message: "¡Buen trabajo! Sigue practicando.",
    practice_message: "¡Sigue practicando, lo lograrás!",
};

static IT: Translations = Translations {
    tagline: "Impara l'{language} con lezioni create apposta per te.",
    generation_error: "Spiacenti, si è verificato un errore durante la generazione. Riprova.",
    storage_error: "Impossibile leggere o salvare la cronologia delle parole.",
    retry_prompt: "Riprovare? (S/n): ",
    back_to_menu: "Torna al menu",
    loading: "Creazione della lezione...",
    progress: "{current} / {total}",
    score: "Punteggio: {score}",
    navigation: "[n] successivo  [p] precedente  [m]enu",
    unknown_command: "Comando sconosciuto.",

    menu_title: "Scegli cosa esercitare",
    learning_language_label: "Voglio imparare",
    ui_language_label: "La mia app è in",
    level_label: "Livello",
    category_label: "Categoria",
    mode_label: "Modalità",
    length_label: "Lunghezza del quiz",
    not_startable: "Scegli prima una categoria e una modalità.",

    image_not_available: "Immagine non disponibile",
    image_saved: "Immagine: {path}",
    loading_image: "Sto disegnando un'immagine...",

    translate_prompt: "Traduci in {language} (? per un suggerimento): ",
    hint: "Suggerimento: {hint}",
    hint_error: "Impossibile ottenere un suggerimento ora.",
    correct: "Corretto!",
    incorrect: "Non proprio. La risposta corretta è {answer}.",
    example_sentence: "Esempio:",
    continue_prompt: "Premi Invio per continuare",

    grammar_rule: "Regola grammaticale: {rule}",
    rule_not_available: "Regola grammaticale non disponibile ([r] per riprovare)",
    choose_option: "La tua risposta (numero o testo, :s per saltare): ",
    option_not_understood: "Risposta non compresa, riprova.",
    getting_explanation: "Caricamento della spiegazione...",
    explanation_error: "Impossibile caricare la spiegazione.",
    correct_answer_was: "La risposta corretta era {answer}.",

    pronunciation_instruction: "Pronuncia questa parola ad alta voce:",
    pronunciation_controls: "[l] ascolta  [r] registra  [m]enu",
    speak_now: "Parla ora...",
    you_said: "Hai detto: {transcript}",
    correct_word_was: "La parola era {word}.",
    mic_error: "Accesso al microfono negato. Consentilo nelle impostazioni di sistema.",
    recognition_error: "Riconoscimento vocale non riuscito. Riprova.",
    speech_unsupported: "La voce non è disponibile su questo sistema.",

    results_title: "Sessione completata!",
    final_score: "Hai ottenuto {score} su {total} ({percentage}%)",
    perfect_message: "Punteggio perfetto! Lavoro eccezionale!",
    excellent_message: "Eccellente! Conosci davvero la materia.",
    good_message: "Buon lavoro! Continua a esercitarti.",
    practice_message: "Continua a esercitarti, ce la farai!",
};

static JA: Translations = Translations {
    tagline: "あなただけのレッスンで{language}を学びましょう。",
    generation_error: "コンテンツの生成中にエラーが発生しました。もう一度お試しください。",
    storage_error: "単語の履歴を読み込めないか、保存できませんでした。",
    retry_prompt: "もう一度試しますか？ (Y/n): ",
    back_to_menu: "メニューに戻る",
    loading: "レッスンを作成中...",
    progress: "{current} / {total}",
    score: "スコア: {score}",
    navigation: "[n] 次へ  [p] 前へ  [m] メニュー",
    unknown_command: "不明なコマンドです。",

    menu_title: "練習する内容を選んでください",
    learning_language_label: "学びたい言語",
    ui_language_label: "アプリの言語",
    level_label: "レベル",
    category_label: "カテゴリー",
    mode_label: "モード",
    length_label: "クイズの長さ",
    not_startable: "まずカテゴリーとモードを選んでください。",

    image_not_available: "画像はありません",
    image_saved: "画像: {path}",
    loading_image: "画像を描いています...",

    translate_prompt: "{language}に翻訳してください (? でヒント): ",
    hint: "ヒント: {hint}",
    hint_error: "今はヒントを取得できません。",
    correct: "正解！",
    incorrect: "惜しい！正解は {answer} です。",
    example_sentence: "例文:",
    continue_prompt: "Enter キーで続行",

    grammar_rule: "文法ルール: {rule}",
    rule_not_available: "文法ルールはありません ([r] で再試行)",
    choose_option: "答え (番号または文字、:s でスキップ): ",
    option_not_understood: "答えを理解できませんでした。もう一度お試しください。",
    getting_explanation: "解説を取得中...",
    explanation_error: "解説を読み込めませんでした。",
    correct_answer_was: "正解は {answer} でした。",

    pronunciation_instruction: "この単語を声に出して言ってください:",
    pronunciation_controls: "[l] 聞く  [r] 録音  [m] メニュー",
    speak_now: "話してください...",
    you_said: "あなたの発音: {transcript}",
    correct_word_was: "正しい単語は {word} でした。",
    mic_error: "マイクへのアクセスが拒否されました。システム設定で許可してください。",
    recognition_error: "音声認識に失敗しました。もう一度お試しください。",
    speech_unsupported: "このシステムでは音声機能を利用できません。",

    results_title: "セッション完了！",
    final_score: "{total} 問中 {score} 問正解 ({percentage}%)",
    perfect_message: "満点です！素晴らしい！",
    excellent_message: "よくできました！しっかり身についています。",
    good_message: "いいですね！練習を続けましょう。",
    practice_message: "練習を続ければきっとできます！",
};

static ZH: Translations = Translations {
    tagline: "通过为你量身定制的课程学习{language}。",
    generation_error: "抱歉，生成内容时出错了。请重试。",
    storage_error: "无法读取或保存你的单词记录。",
    retry_prompt: "重试吗？(Y/n): ",
    back_to_menu: "返回菜单",
    loading: "正在生成课程...",
    progress: "{current} / {total}",
    score: "得分: {score}",
    navigation: "[n] 下一个  [p] 上一个  [m] 菜单",
    unknown_command: "未知命令。",

    menu_title: "选择练习内容",
    learning_language_label: "我想学习",
    ui_language_label: "应用语言",
    level_label: "级别",
    category_label: "类别",
    mode_label: "模式",
    length_label: "测验长度",
    not_startable: "请先选择类别和模式。",

    image_not_available: "暂无图片",
    image_saved: "图片: {path}",
    loading_image: "正在绘制图片...",

    translate_prompt: "翻译成{language}（输入 ? 获取提示）: ",
    hint: "提示: {hint}",
    hint_error: "暂时无法获取提示。",
    correct: "正确！",
    incorrect: "不太对。正确答案是 {answer}。",
    example_sentence: "例句:",
    continue_prompt: "按 Enter 继续",

    grammar_rule: "语法规则: {rule}",
    rule_not_available: "暂无语法规则（[r] 重试）",
    choose_option: "你的答案（编号或文字，:s 跳过）: ",
    option_not_understood: "无法理解你的答案，请重试。",
    getting_explanation: "正在获取解释...",
    explanation_error: "无法加载解释。",
    correct_answer_was: "正确答案是 {answer}。",

    pronunciation_instruction: "请大声说出这个单词:",
    pronunciation_controls: "[l] 听  [r] 录音  [m] 菜单",
    speak_now: "请说话...",
    you_said: "你说的是: {transcript}",
    correct_word_was: "这个单词是 {word}。",
    mic_error: "麦克风访问被拒绝。请在系统设置中允许访问。",
    recognition_error: "语音识别失败。请重试。",
    speech_unsupported: "此系统不支持语音功能。",

    results_title: "练习完成！",
    final_score: "你答对了 {total} 题中的 {score} 题（{percentage}%）",
    perfect_message: "满分！太棒了！",
    excellent_message: "优秀！你掌握得很好。",
    good_message: "做得好！继续练习。",
    practice_message: "继续练习，你一定能做到！",
};

static AR: Translations = Translations {
    tagline: "تعلّم {language} بدروس مصممة خصيصًا لك.",
    generation_error: "عذرًا، حدث خطأ أثناء إنشاء المحتوى. يرجى المحاولة مرة أخرى.",
    storage_error: "تعذّرت قراءة سجل الكلمات أو حفظه.",
    retry_prompt: "هل تريد المحاولة مرة أخرى؟ (Y/n): ",
    back_to_menu: "العودة إلى القائمة",
    loading: "جارٍ إنشاء درسك...",
    progress: "{current} / {total}",
    score: "النتيجة: {score}",
    navigation: "[n] التالي  [p] السابق  [m] القائمة",
    unknown_command: "أمر غير معروف.",

    menu_title: "اختر ما تريد التدرب عليه",
    learning_language_label: "أريد أن أتعلم",
    ui_language_label: "لغة التطبيق",
    level_label: "المستوى",
    category_label: "الفئة",
    mode_label: "الوضع",
    length_label: "طول الاختبار",
    not_startable: "اختر فئة ووضعًا أولًا.",

    image_not_available: "الصورة غير متوفرة",
    image_saved: "الصورة: {path}",
    loading_image: "جارٍ رسم صورة...",

    translate_prompt: "ترجم إلى {language} (? للحصول على تلميح): ",
    hint: "تلميح: {hint}",
    hint_error: "تعذر الحصول على تلميح الآن.",
    correct: "صحيح!",
    incorrect: "ليس تمامًا. الإجابة الصحيحة هي {answer}.",
    example_sentence: "مثال:",
    continue_prompt: "اضغط Enter للمتابعة",

    grammar_rule: "القاعدة النحوية: {rule}",
    rule_not_available: "القاعدة النحوية غير متوفرة ([r] لإعادة المحاولة)",
    choose_option: "إجابتك (رقم أو نص، :s للتخطي): ",
    option_not_understood: "لم نفهم إجابتك، يرجى المحاولة مرة أخرى.",
    getting_explanation: "جارٍ جلب الشرح...",
    explanation_error: "تعذر تحميل الشرح.",
    correct_answer_was: "كانت الإجابة الصحيحة {answer}.",

    pronunciation_instruction: "انطق هذه الكلمة بصوت عالٍ:",
    pronunciation_controls: "[l] استمع  [r] سجّل  [m] القائمة",
    speak_now: "تحدث الآن...",
    you_said: "قلت: {transcript}",
    correct_word_was: "كانت الكلمة {word}.",
    mic_error: "تم رفض الوصول إلى الميكروفون. اسمح به من إعدادات النظام.",
    recognition_error: "فشل التعرف على الكلام. يرجى المحاولة مرة أخرى.",
    speech_unsupported: "الكلام غير متاح على هذا النظام.",

    results_title: "انتهت الجلسة!",
    final_score: "حصلت على {score} من {total} ({percentage}%)",
    perfect_message: "نتيجة كاملة! عمل رائع!",
    excellent_message: "ممتاز! أنت تتقن هذا حقًا.",
    good_message: "عمل جيد! واصل التدرب.",
    practice_message: "واصل التدرب، ستنجح!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_every_placeholder() {
        let text = fill(
            translations(Language::En).final_score,
            &[("score", "8"), ("total", "10"), ("percentage", "80")],
        );
        assert_eq!(text, "You scored 8 out of 10 (80%)");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        assert_eq!(fill("{a} {b}", &[("a", "x")]), "x {b}");
    }

    #[test]
    fn every_language_keeps_its_placeholders() {
        for language in Language::ALL {
            let t = translations(language);
            for placeholder in ["{score}", "{total}", "{percentage}"] {
                assert!(t.final_score.contains(placeholder), "{language:?} final_score");
            }
            assert!(t.progress.contains("{current}") && t.progress.contains("{total}"));
            assert!(t.incorrect.contains("{answer}"), "{language:?} incorrect");
            assert!(t.you_said.contains("{transcript}"), "{language:?} you_said");
            assert!(t.translate_prompt.contains("{language}"), "{language:?} translate_prompt");
        }
    }
}
