//! Built-in shop content

use crate::content::{Faq, Testimonial};
use crate::product::{Product, RoastLevel};

const CITY_SERIES: &str = "城市系列";
const PLAYWRIGHT_SERIES: &str = "劇作家系列";

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new(1, "倫敦西區", 420)
            .with_series(CITY_SERIES)
            .with_flavor("檸檬、白花、佛手柑")
            .with_roast(RoastLevel::Light)
            .with_origin("衣索比亞 耶加雪菲")
            .with_image("https://images.unsplash.com/photo-1447933601403-0c6688de566e?w=800&q=80")
            .with_description(
                "經典永不落幕，如同西區的音樂劇。明亮的檸檬酸質與細緻的白花香氣交織，尾韻帶有優雅的佛手柑清香，是一場感官的盛宴。",
            ),
        Product::new(2, "百老匯", 360)
            .with_series(CITY_SERIES)
            .with_flavor("焦糖、堅果、黑巧克力")
            .with_roast(RoastLevel::Medium)
            .with_origin("哥倫比亞 慧蘭")
            .with_image("https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=800&q=80")
            .with_description(
                "華麗而均衡，百老匯的黃金年代。甜美的焦糖香氣，搭配堅果的醇厚口感，黑巧克力的尾韻為整場演出畫下完美句點。",
            ),
        Product::new(3, "巴黎左岸", 380)
            .with_series(CITY_SERIES)
            .with_flavor("莓果、紅酒、煙燻")
            .with_roast(RoastLevel::MediumDark)
            .with_origin("瓜地馬拉 安提瓜")
            .with_image("https://images.unsplash.com/photo-1511920170033-f8396924c348?w=800&q=80")
            .with_description(
                "文人的咖啡館，存在主義的餘韻。莓果的酸甜與紅酒般的醇厚交融，細緻的煙燻香氣彷彿左岸咖啡館的時光。",
            ),
        Product::new(4, "莎士比亞", 360)
            .with_series(PLAYWRIGHT_SERIES)
            .with_flavor("黑醋栗、葡萄柚、蜂蜜")
            .with_roast(RoastLevel::Medium)
            .with_origin("肯亞 AA")
            .with_image("https://images.unsplash.com/photo-1587734195503-904a22d6f7a5?w=800&q=80")
            .with_description(
                "悲喜交織，層次豐富。如同莎翁筆下的劇作，黑醋栗的濃郁、葡萄柚的明亮、蜂蜜的甜美，每一口都是一段故事。",
            ),
        Product::new(5, "契訶夫", 380)
            .with_series(PLAYWRIGHT_SERIES)
            .with_flavor("榛果、奶油、可可")
            .with_roast(RoastLevel::MediumDark)
            .with_origin("巴西 喜拉朵")
            .with_image("https://images.unsplash.com/photo-1514432324607-a09d9b4aefdd?w=800&q=80")
            .with_description(
                "日常的詩意，溫柔而深刻。榛果的溫潤、奶油的柔滑、可可的綿密，像契訶夫筆下那些細膩的生活切片。",
            ),
        Product::new(6, "貝克特", 380)
            .with_series(PLAYWRIGHT_SERIES)
            .with_flavor("雪松、香料、黑糖")
            .with_roast(RoastLevel::Dark)
            .with_origin("印尼 曼特寧")
            .with_image("https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=800&q=80")
            .with_description(
                "等待的藝術，濃郁而內斂。雪松的沉穩、香料的複雜、黑糖的甜蜜，如同貝克特的荒謬劇場，餘韻悠長。",
            ),
    ]
}

pub(crate) fn faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            1,
            "如何付款？",
            "我們採用 7-11 超商取貨付款方式。您只需在訂購表單填寫資料，商品送達指定門市後，取貨時再付款即可，安全又方便。",
        ),
        Faq::new(
            2,
            "運費怎麼算？",
            "全台灣 7-11 門市取貨，單筆訂單運費統一為 NT$ 60。滿 NT$ 1000 免運費。",
        ),
        Faq::new(
            3,
            "多久會到貨？",
            "一般工作天（週一至週五）下午 2 點前的訂單，約 3-5 個工作天送達指定門市。假日訂單將於下個工作日開始處理。",
        ),
        Faq::new(
            4,
            "可以退換貨嗎？",
            "商品寄出後，如因個人因素（口味不符、訂錯商品等）恕不接受退換貨。若收到瑕疵品，請於收貨 7 日內聯繫客服，我們將協助處理。",
        ),
        Faq::new(
            5,
            "咖啡豆保存方式？",
            "建議將咖啡豆存放在陰涼乾燥處，避免陽光直射與高溫潮濕環境。開封後請密封保存，並於一個月內飲用完畢，以確保最佳風味。",
        ),
        Faq::new(
            6,
            "如何聯繫客服？",
            "您可以透過以下方式聯繫我們：Email: hello@cafe-theatre.com / LINE官方帳號: @cafetheatre / 客服專線: 02-1234-5678（週一至週五 10:00-18:00）",
        ),
    ]
}

pub(crate) fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            1,
            "倫敦西區真的太驚艷了！明亮的花香和柑橘調完全是我的菜，每天早晨都像在看一場精彩的演出。",
            "Sarah L.",
            5,
        ),
        Testimonial::new(
            2,
            "貝克特的深焙層次感很豐富，喝起來沉穩內斂，很適合靜下來慢慢品味，配合閱讀時光超棒。",
            "Mark W.",
            5,
        ),
        Testimonial::new(
            3,
            "包裝設計超有質感，送禮自用兩相宜。咖啡本身品質也很好，風味描述很精準，值得信賴。",
            "Jennifer C.",
            5,
        ),
        Testimonial::new(
            4,
            "莎士比亞系列真的很特別，黑醋栗跟蜂蜜的組合太迷人了，喝完會想再回購！",
            "David T.",
            5,
        ),
        Testimonial::new(
            5,
            "第一次在網路上買咖啡豆，咖啡小劇場的品質讓我很放心，客服回覆也很迅速，推薦！",
            "Emily K.",
            4,
        ),
        Testimonial::new(
            6,
            "巴黎左岸的煙燻味很獨特，喝起來真的有種在文青咖啡館的感覺，氛圍感滿分。",
            "Alex M.",
            5,
        ),
    ]
}
