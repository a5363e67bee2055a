// src/render/text.rs
//
// Static page copy. Plain text; the renderer escapes it.

pub const TITLE: &str = "SNAP Participation Dashboard";

/// (heading, paragraph) pairs shown before the data preview.
pub const INTRO: [(&str, &str); 4] = [
    (
        "What is SNAP?",
        "SNAP stands for the Supplemental Nutrition Assistance Program. It's a social safety net program designed to give low-income households monthly benefits toward buying groceries. It was first enacted by President Lyndon Johnson as the Food Stamp Program in the Food Stamp Act of 1964. In 2008, the name of the program was changed to SNAP.",
    ),
    (
        "Why is SNAP important?",
        "Despite being one of the wealthiest nations in the world, the United States has a major issue with food insecurity. Today, there are a record number of people who use and rely on SNAP to buy their groceries and get their necessary nutrients. It was especially important at the beginning of the COVID-19 pandemic when worsened economic conditions resulted in a rapid growth in SNAP eligibility and participation. The U.S. Department of Agriculture estimates that 43 million people received SNAP benefits in April 2020, a great increase from 35.7 million people in 2019.",
    ),
    (
        "What is the goal of this project?",
        "The goal of this project is to de-stigmatize social safety net programs like SNAP by giving a holisitic view of the demographic factors that could potentially influence whether someone is eligible for SNAP. By analyzing state trends on a macro level rather than looking at individual determinants, we can get a better picture as to what makes up communities that need better access to nutrition. For instance, by analyzing renting and mortgage rates, we can see what role cost of living plays in SNAP eligibility. Or, by analyzing educational attainment, we can see what role economic mobility plays in SNAP eligibility. Presenting data in this way helps us understand the bigger picture of food insecurity and who it affects.",
    ),
    (
        "How do I use this app?",
        "All you have to do is scroll down to the plot sections of the app and choose which variables and panels you would like to see! For each plot, we have provided an interpretation of the trends observed. All of the plots are interactive, so if you move your cursor over any of the data points, you will find a label that tells you what state your cursor is on and what their SNAP participation rate is.",
    ),
];

pub const DATA_HEADING: &str = "Let's look at our data...";

pub const DATA_INTRO: &str = "Here is a sample of our dataset, featuring our variables of interest taken from the ACS 2020 5-year estimates. Our variables include state, population, SNAP participation rate, poverty rate, unemployment rate, labor force participaton rate, the rate of educational attainment past the high school level, percentages of racial minorities, renting rate, and mortgage rates. All of these variables are state averages over the period of 2016-2020. Our key dependent variable that we'll be analyzing is snap_pct.";

pub const HEADLINE_INTRO: &str = "The graph below shows the average SNAP participation rate from 2016-2020 by state. If you move your cursor over any of the states in the plot, you'll see both the state code and the percentage of people in that state that rely on SNAP benefits.";

pub const HEADLINE_COMMENTARY: &str = "As we can see, between 2016-2020, the states with the highest concentrations of SNAP participants tend to be concentrated in the eastern half of the country. There are some exceptions, such as New Mexico and Oregon, that are located in the western half of the country. Let's also note that there are some states that have very high SNAP participation rates in the eastern half, such as West Virginia, Louisiana, Mississippi, Rhode Island, New York, Maine, and Pennsylvania.";

pub const CHOROPLETH_HEADING: &str = "Variable Colored Chloropleths";
pub const CHOROPLETH_INTRO: &str = "Now, let's look at some of the other variables in our dataset...";

pub const BAR_HEADING: &str = "Demographics - Stacked Bar Plots";
pub const BAR_INTRO: &str = "Now let's look at how some demographic information compares across states to get a more complete profile...";

pub const SCATTER_HEADING: &str = "Two Variable Scatter Plots";
pub const SCATTER_INTRO: &str = "Now let's compare our variables side-by-side using a scatter plot. The datapoints are color coded based on census region and sized proportionate to state population.";

pub const FEEDBACK_HEADING: &str = "Feedback";
pub const FEEDBACK_INTRO: &str = "Thank you for making it to the end! Now, we would like to hear from you!";
pub const FEEDBACK_PROMPT: &str = "What is something you learned from this app?";

pub const WORKS_CITED: [&str; 9] = [
    "Center on Budget and Policy Priorities. (2022, January 6). A quick guide to snap eligibility and Benefits. Center on Budget and Policy Priorities. Retrieved from https://www.cbpp.org/research/food-assistance/a-quick-guide-to-snap-eligibility-and-benefits",
    "Chandra, R. V., & Varanasi, B. S. (2015). Python requests essentials. Packt Publishing Ltd.",
    "Harris, C. R., Millman, K. J., van der Walt, S. J., Gommers, R., Virtanen, P., Cournapeau, D., … Oliphant, T. E. (2020). Array programming with NumPy. Nature, 585, 357–362. https://doi.org/10.1038/s41586-020-2649-2",
    "Inc., P. T. (2015). Collaborative data science. Montreal, QC: Plotly Technologies Inc. Retrieved from https://plot.ly",
    "McKinney, W., & others. (2010). Data structures for statistical computing in python. In Proceedings of the 9th Python in Science Conference (Vol. 445, pp. 51–56).",
    "Tiehen, L. (2020, August 3). Taking a closer look at Supplemental Nutrition Assistance Program (SNAP) participation and expenditures. USDA Economic Research Service. Retrieved from https://www.ers.usda.gov/amber-waves/2020/august/taking-a-closer-look-at-supplemental-nutrition-assistance-program-snap-participation-and-expenditures/#:~:text=Preliminary%20national%20data%20available%20at,SNAP%20benefits%20in%20April%202020.",
    "U.S. Census Bureau (2022). 2016-2020 American Community Survey 5-year Estimates. Retrieved from https://www.census.gov/data/developers/data-sets/acs-5year.html",
    "U.S. Department of Agriculture. (2018, September 11). A short history of snap. USDA Food and Nutrition Service. Retrieved from https://www.fns.usda.gov/snap/short-history-snap",
    "VanderPlas, J., Granger, B., Heer, J., Moritz, D., Wongsuphasawat, K., Satyanarayan, A., … Sievert, S. (2018). Altair: Interactive statistical visualizations for python. Journal of Open Source Software, 3(32), 1057.",
];
