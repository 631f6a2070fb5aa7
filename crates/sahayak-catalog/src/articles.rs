//! Health-awareness articles.

use sahayak_contracts::{
    article::{Article, ArticleCategory},
    locale::Localized,
};

fn article(id: &str, title: (&str, &str), category: ArticleCategory, summary: (&str, &str), content: (&str, &str)) -> Article {
    Article {
        id: id.to_string(),
        title: Localized::text(title.0, title.1),
        category,
        summary: Localized::text(summary.0, summary.1),
        content: Localized::text(content.0, content.1),
    }
}

pub fn articles() -> Vec<Article> {
    vec![
        article(
            "1",
            ("Understanding Heart Health", "मुटु स्वास्थ्य बुझ्दै"),
            ArticleCategory::Cardiovascular,
            (
                "Learn about maintaining a healthy heart and preventing cardiovascular diseases.",
                "स्वस्थ मुटु कायम राख्ने र हृदय रोगहरू रोक्ने बारे जान्नुहोस्।",
            ),
            (
                "Cardiovascular health is crucial for overall wellbeing. Regular exercise, a balanced diet low in saturated fats, managing stress, and avoiding smoking are key factors. Regular check-ups and monitoring blood pressure and cholesterol levels can help prevent heart disease.",
                "हृदय स्वास्थ्य समग्र कल्याणको लागि महत्त्वपूर्ण छ। नियमित व्यायाम, संतृप्त बोसोमा कम सन्तुलित आहार, तनाव व्यवस्थापन, र धुम्रपानबाट बच्नु मुख्य कारकहरू हुन्। नियमित चेकअप र रक्तचाप र कोलेस्ट्रोल स्तर निगरानीले हृदय रोग रोक्न मद्दत गर्न सक्छ।",
            ),
        ),
        article(
            "2",
            ("Balanced Nutrition Guide", "सन्तुलित पोषण गाइड"),
            ArticleCategory::Nutrition,
            (
                "Essential nutrients your body needs and how to get them from food.",
                "तपाईंको शरीरलाई आवश्यक पोषक तत्वहरू र खानाबाट कसरी प्राप्त गर्ने।",
            ),
            (
                "A balanced diet includes proteins, carbohydrates, healthy fats, vitamins, and minerals. Include plenty of fruits, vegetables, whole grains, and lean proteins. Stay hydrated and limit processed foods, sugar, and excessive salt intake.",
                "सन्तुलित आहारमा प्रोटीन, कार्बोहाइड्रेट, स्वस्थ बोसो, भिटामिन र खनिजहरू समावेश हुन्छन्। धेरै फलफूल, तरकारी, सम्पूर्ण अन्न र दुबला प्रोटीन समावेश गर्नुहोस्। हाइड्रेटेड रहनुहोस् र प्रशोधित खाना, चिनी र अत्यधिक नुन सेवन सीमित गर्नुहोस्।",
            ),
        ),
        article(
            "3",
            ("Mental Wellness Tips", "मानसिक कल्याण सुझावहरू"),
            ArticleCategory::MentalHealth,
            (
                "Simple practices to maintain good mental health and reduce stress.",
                "राम्रो मानसिक स्वास्थ्य कायम राख्न र तनाव कम गर्न सरल अभ्यासहरू।",
            ),
            (
                "Mental health is as important as physical health. Practice mindfulness, get adequate sleep, maintain social connections, exercise regularly, and don't hesitate to seek professional help when needed. Managing stress through relaxation techniques can significantly improve quality of life.",
                "मानसिक स्वास्थ्य शारीरिक स्वास्थ्य जत्तिकै महत्त्वपूर्ण छ। सजगता अभ्यास गर्नुहोस्, पर्याप्त निद्रा लिनुहोस्, सामाजिक सम्पर्कहरू कायम राख्नुहोस्, नियमित व्यायाम गर्नुहोस्, र आवश्यक परेको बेला व्यावसायिक सहायता लिन नहिचकिचाउनुहोस्। विश्राम प्रविधिहरू मार्फत तनाव व्यवस्थापनले जीवनको गुणस्तरमा उल्लेखनीय सुधार गर्न सक्छ।",
            ),
        ),
        article(
            "4",
            ("Disease Prevention Strategies", "रोग रोकथाम रणनीतिहरू"),
            ArticleCategory::Prevention,
            (
                "Proactive steps to prevent common illnesses and stay healthy.",
                "सामान्य रोगहरू रोक्न र स्वस्थ रहन सक्रिय कदमहरू।",
            ),
            (
                "Prevention is better than cure. Regular handwashing, vaccinations, healthy lifestyle choices, regular health screenings, and maintaining good hygiene can prevent many diseases. Stay updated with recommended vaccinations and health check-ups.",
                "रोकथाम उपचार भन्दा राम्रो छ। नियमित हात धुने, खोप, स्वस्थ जीवनशैली छनोट, नियमित स्वास्थ्य जाँच, र राम्रो सरसफाइ कायम राख्दा धेरै रोगहरू रोक्न सकिन्छ। सिफारिस गरिएका खोपहरू र स्वास्थ्य जाँचहरूसँग अद्यावधिक रहनुहोस्।",
            ),
        ),
        article(
            "5",
            ("Exercise and Physical Activity", "व्यायाम र शारीरिक गतिविधि"),
            ArticleCategory::Cardiovascular,
            (
                "Benefits of regular exercise and how to incorporate it into your routine.",
                "नियमित व्यायामका फाइदाहरू र तपाईंको दिनचर्यामा कसरी समावेश गर्ने।",
            ),
            (
                "Regular physical activity strengthens the heart, improves circulation, helps maintain healthy weight, and boosts mental health. Aim for at least 150 minutes of moderate exercise per week. Include both cardio and strength training exercises.",
                "नियमित शारीरिक गतिविधिले मुटुलाई बलियो बनाउँछ, परिसंचरण सुधार गर्छ, स्वस्थ तौल कायम राख्न मद्दत गर्छ, र मानसिक स्वास्थ्य बढाउँछ। प्रति हप्ता कम्तिमा १५० मिनेट मध्यम व्यायामको लक्ष्य राख्नुहोस्। कार्डियो र शक्ति प्रशिक्षण व्यायाम दुवै समावेश गर्नुहोस्।",
            ),
        ),
    ]
}
