use serde::Serialize;

use iglobal_core::{Language, Region};

/// One language's UI strings.
///
/// Fields mirror the storefront surfaces: hero copy, price breakdown, chat
/// widget, tracking widget, and the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub select_region: &'static str,
    pub select_lang: &'static str,
    pub buy_now: &'static str,
    pub price_details: &'static str,
    pub service_fee: &'static str,
    pub est_total: &'static str,
    pub shipping_note: &'static str,
    pub australia: &'static str,
    pub uk: &'static str,
    pub chat_title: &'static str,
    pub chat_placeholder: &'static str,
    pub assistant_unavailable: &'static str,
    pub track_title: &'static str,
    pub track_placeholder: &'static str,
    pub track_button: &'static str,
    pub track_status: &'static str,
    pub order_placed: &'static str,
    pub shipped: &'static str,
    pub in_transit: &'static str,
    pub customs: &'static str,
    pub delivered: &'static str,
    pub order_form_title: &'static str,
    pub full_name: &'static str,
    pub phone_number: &'static str,
    pub address: &'static str,
    pub confirm_order: &'static str,
    pub order_success: &'static str,
    pub order_success_desc: &'static str,
    pub close: &'static str,
}

pub const EN: Translations = Translations {
    title: "iGlobal Concierge",
    subtitle: "Premium Personal Shopping for iPhone 17 Series",
    select_region: "Region",
    select_lang: "Language",
    buy_now: "Pre-order Now",
    price_details: "Price Breakdown",
    service_fee: "Service Fee (5%)",
    est_total: "Est. Total (CNY)",
    shipping_note: "* Shipping and custom duties are calculated at checkout",
    australia: "Australia",
    uk: "United Kingdom",
    chat_title: "Shopping Assistant",
    chat_placeholder: "Ask our AI about iPhone 17 features...",
    assistant_unavailable: "AI assistant is busy, please try again later.",
    track_title: "Track Shipment",
    track_placeholder: "Order Number (e.g. IG12345)",
    track_button: "Search",
    track_status: "Current Status",
    order_placed: "Order Placed",
    shipped: "Shipped from Origin",
    in_transit: "International Transit",
    customs: "Clearing Customs",
    delivered: "Out for Delivery",
    order_form_title: "Shipping Information",
    full_name: "Full Name",
    phone_number: "Phone Number",
    address: "Shipping Address",
    confirm_order: "Confirm Order",
    order_success: "Order Placed Successfully!",
    order_success_desc: "Our concierge will contact you within 24 hours to confirm payment and shipping details.",
    close: "Close",
};

pub const ZH: Translations = Translations {
    title: "iGlobal 全球代购",
    subtitle: "iPhone 17 系列全球首发直采专家",
    select_region: "选择地区",
    select_lang: "语言",
    buy_now: "立即预订",
    price_details: "价格明细",
    service_fee: "代购费 (5%)",
    est_total: "预计总额 (人民币)",
    shipping_note: "* 运费与关税将在结账时根据实际地址计算",
    australia: "澳大利亚",
    uk: "英国",
    chat_title: "代购小助手",
    chat_placeholder: "咨询 AI 助手关于 iPhone 17 的新功能...",
    assistant_unavailable: "助手暂时离开，请稍后再试。",
    track_title: "物流查询",
    track_placeholder: "输入订单号 (例如: IG12345)",
    track_button: "查询",
    track_status: "当前状态",
    order_placed: "已下单",
    shipped: "已从境外发货",
    in_transit: "国际运输中",
    customs: "清关中",
    delivered: "派送中",
    order_form_title: "收货信息填写",
    full_name: "收货人姓名",
    phone_number: "联系电话",
    address: "详细收货地址",
    confirm_order: "确认提交订单",
    order_success: "订单提交成功！",
    order_success_desc: "我们的代购专员将在 24 小时内通过电话与您确认付款及物流详情。",
    close: "关闭",
};

impl Translations {
    /// The static table for a language.
    pub const fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::Zh => &ZH,
            Language::En => &EN,
        }
    }

    /// Localized display name of a region picker entry.
    pub const fn region_name(&self, region: Region) -> &'static str {
        match region {
            Region::Au => self.australia,
            Region::Uk => self.uk,
        }
    }
}
